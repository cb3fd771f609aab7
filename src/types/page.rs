use pdf_writer::{Content, Ref};

/// One output page: the pdf_writer object references plus the content
/// stream the `Writer` appends text operators to.
pub struct Page {
    pub page_id: Ref,
    pub content_id: Ref,
    pub content: Content,
}

/// Fixed page dimensions and margins, in PDF points. US letter with the
/// authored half-inch top/bottom and one-inch side margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    /// horizontal span available to text, before any style indent
    pub fn writable_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            width: 612.0,
            height: 792.0,
            margin_top: 36.0,
            margin_bottom: 36.0,
            margin_left: 72.0,
            margin_right: 72.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_geometry_writable_width() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.writable_width(), 468.0);
    }
}
