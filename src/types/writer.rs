use pdf_writer::{Content, Name, Ref, Str};

use crate::types::{encoding, Face, FontReference, Page, PageGeometry, TextBlock};

/// The rendering cursor. Owns
/// - the ref allocator
/// - the page list and the current vertical position
/// - the four registered Helvetica face references
///
/// `write` lays a measured `TextBlock` onto the current page, starting new
/// pages whenever the next baseline would cross the bottom margin. Horizontal
/// placement is purely positional: spaces and column gaps are encoded as
/// per-word offsets, never as space glyphs.
pub struct Writer<'a> {
    pub y: f32,
    pub pages: Vec<Page>,
    pub fonts: [FontReference<'a>; 4],
    pub geometry: PageGeometry,
    alloc: Ref,
}

impl Writer<'_> {
    /// allocates the font references and the first page, cursor at the top margin
    pub fn new(geometry: PageGeometry) -> Self {
        let mut alloc = Ref::new(1);

        let fonts = [
            FontReference { id: alloc.bump(), name: Name(b"Helvetica") },
            FontReference { id: alloc.bump(), name: Name(b"Helvetica-Bold") },
            FontReference { id: alloc.bump(), name: Name(b"Helvetica-Oblique") },
            FontReference { id: alloc.bump(), name: Name(b"Helvetica-BoldOblique") },
        ];

        let first_page = Page {
            page_id: alloc.bump(),
            content_id: alloc.bump(),
            content: Content::new(),
        };

        Writer {
            y: geometry.height - geometry.margin_top,
            pages: vec![first_page],
            fonts,
            geometry,
            alloc,
        }
    }

    /// get a new reference for an indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the cursor down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    /// starts a fresh page unconditionally and resets the cursor
    pub fn break_page(&mut self) {
        let page = Page {
            page_id: self.bump(),
            content_id: self.bump(),
            content: Content::new(),
        };

        self.pages.push(page);
        self.y = self.geometry.height - self.geometry.margin_top;
    }

    /// emits every line of the block, flowing onto new pages as needed
    pub fn write(&mut self, block: &TextBlock) {
        // a page must exist by now
        debug_assert!(!self.pages.is_empty());

        let font_names: [Name; 4] = [
            self.fonts[Face::Regular.index()].name,
            self.fonts[Face::Bold.index()].name,
            self.fonts[Face::Oblique.index()].name,
            self.fonts[Face::BoldOblique.index()].name,
        ];

        for line in &block.lines {
            // line break with no words still consumes vertical space
            if line.body.is_empty() {
                self.y -= block.leading;
                continue;
            }

            if self.y - block.leading < self.geometry.margin_bottom {
                self.break_page();
            }

            self.y -= block.leading;

            let x = self.geometry.margin_left + block.indent + line.offset;
            debug_assert!(x >= self.geometry.margin_left);
            debug_assert!(self.y >= self.geometry.margin_bottom);

            // break_page keeps the invariant that a last page exists
            let page = self.pages.last_mut().unwrap();
            let target = &mut page.content;

            target.begin_text();
            target.set_fill_rgb(block.color.r, block.color.g, block.color.b);
            target.next_line(x, self.y);

            let mut current_face: Option<Face> = None;
            let mut words = line.body.iter().peekable();

            while let Some(word) = words.next() {
                debug_assert!(!word.text.is_empty());

                if current_face != Some(word.face) {
                    target.set_font(font_names[word.face.index()], block.font_size);
                    current_face = Some(word.face);
                }

                target.show(Str(&encoding::winansi(word.text)));

                // advance the line origin past this word and the gap before the next
                if let Some(next) = words.peek() {
                    target.next_line(word.width + next.offset, 0.0);
                }
            }

            target.end_text();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Style, StyleSheet, TextBlock, Word};

    fn word(text: &str) -> Word<'_> {
        Word {
            text,
            face: Face::Regular,
            width: 50.0,
            offset: 0.0,
        }
    }

    fn one_line_block(style: &Style) -> TextBlock<'static> {
        let mut block = TextBlock::new(style);
        block.current().push(word("line"));
        block
    }

    #[test]
    fn starts_with_one_page_at_top_margin() {
        let writer = Writer::new(PageGeometry::default());
        assert_eq!(writer.pages.len(), 1);
        assert_eq!(writer.y, 792.0 - 36.0);
    }

    #[test]
    fn break_page_resets_cursor() {
        let mut writer = Writer::new(PageGeometry::default());
        writer.feed(300.0);
        writer.break_page();

        assert_eq!(writer.pages.len(), 2);
        assert_eq!(writer.y, 792.0 - 36.0);
    }

    #[test]
    fn overflowing_line_flows_onto_new_page() {
        let styles = StyleSheet::default();
        let mut writer = Writer::new(PageGeometry::default());

        // park the cursor just above the bottom margin
        let geometry = writer.geometry;
        writer.y = geometry.margin_bottom + styles.body.leading / 2.0;
        writer.write(&one_line_block(&styles.body));

        assert_eq!(writer.pages.len(), 2);
    }

    #[test]
    fn fitting_line_stays_on_page() {
        let styles = StyleSheet::default();
        let mut writer = Writer::new(PageGeometry::default());

        writer.write(&one_line_block(&styles.body));

        assert_eq!(writer.pages.len(), 1);
        assert_eq!(writer.y, 792.0 - 36.0 - styles.body.leading);
    }
}
