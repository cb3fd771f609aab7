//! # Introduction
//!
//! cvgen renders a single, hard-coded résumé into a paginated, text-only PDF.
//! Built on top of pdf_writer (Typst), this is a no frills crate: it defines a
//! small set of paragraph styles, appends content blocks in a fixed order, and
//! serializes them once into `assets/Wendeel-Marinho-CTO-Resume.pdf`. There is
//! no input, no configuration, and no state that outlives the single run.
//!
//! Supported layout:
//! - [X] Helvetica font family (normal, bold, oblique, bold-oblique)
//! - [X] Paragraphs with per-span bold lead-ins
//! - [X] Left and centered alignment
//! - [X] Automatic line wrapping against page margins
//! - [X] Automatic page flow plus an explicit forced page break
//! - [X] Spacers and simple tables
//! - [X] WinAnsi text encoding (Latin-1 accents, bullet glyph, dashes)
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! The main entry point is the `Doc` struct: append `Block`s with the
//! consuming builder, then call `.save()` which renders the block sequence
//! through pdf_writer and writes the finished PDF in one shot.
//!
//! ### Render the authored résumé
//! ```no_run
//! use cvgen::{assemble, content, types::StyleSheet};
//!
//! let resume = content::resume();
//! let styles = StyleSheet::default();
//! let doc = assemble::assemble(&resume, &styles);
//!
//! doc.save("assets/Wendeel-Marinho-CTO-Resume.pdf").unwrap();
//! ```

pub mod assemble;
pub mod content;
pub mod traits;
pub mod types;
