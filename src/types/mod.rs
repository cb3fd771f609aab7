mod block;
mod doc;
pub mod encoding;
mod error;
mod font;
mod font_reference;
mod page;
mod style;
mod text;
mod writer;

pub use block::{Block, Span};
pub use doc::Doc;
pub use error::Error;
pub use font::Helvetica;
pub use font_reference::FontReference;
pub use page::{Page, PageGeometry};
pub use style::{Alignment, Color, Face, Style, StyleOverride, StyleSheet};
pub use text::{Line, TextBlock, Word};
pub use writer::Writer;
