use crate::types::Face;

/// Character advance widths for one font family. Widths are expressed in
/// 1/1000ths of an em, as in the Adobe base-14 AFM files, and scale linearly
/// with font size. Line breaking and alignment both depend on these numbers
/// matching what a PDF viewer will actually draw, so each face must be
/// covered for the full printable ASCII range.
pub trait FontMetrics {
    fn regular(&self, ch: char) -> f32;
    fn bold(&self, ch: char) -> f32;
    fn oblique(&self, ch: char) -> f32;
    fn bold_oblique(&self, ch: char) -> f32;

    /// Width of one character at `size` points.
    fn advance(&self, ch: char, face: Face, size: f32) -> f32 {
        let units = match face {
            Face::Regular => self.regular(ch),
            Face::Bold => self.bold(ch),
            Face::Oblique => self.oblique(ch),
            Face::BoldOblique => self.bold_oblique(ch),
        };

        units * size / 1000.0
    }

    /// Width of a whole string at `size` points.
    fn text_width(&self, text: &str, face: Face, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch, face, size)).sum()
    }
}
