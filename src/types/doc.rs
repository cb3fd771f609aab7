use std::path::Path;

use log::debug;
use pdf_writer::{Chunk, Finish, Name, Pdf, Rect};

use crate::traits::FontMetrics;
use crate::types::{
    Alignment, Block, Error, Helvetica, PageGeometry, Span, Style, TextBlock, Word, Writer,
};

/// The document: fixed page geometry plus the ordered, append-only block
/// sequence. Built once by the consuming builder, consumed once by `render`.
pub struct Doc {
    geometry: PageGeometry,
    blocks: Vec<Block>,
}

impl Doc {
    pub fn new(geometry: PageGeometry) -> Self {
        Doc {
            geometry,
            blocks: Vec::with_capacity(64),
        }
    }

    /// appends one block and returns the builder
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// The single terminal render operation: lays every block out
    /// top-to-bottom within the margins, wrapping text and flowing onto new
    /// pages on overflow, and honoring explicit page breaks regardless of
    /// remaining space. Returns the finished PDF bytes. Output is
    /// deterministic for identical block sequences.
    pub fn render(&self) -> Result<Vec<u8>, Error> {
        let mut pdf = Pdf::new();
        let mut streams = Chunk::new();
        let mut writer = Writer::new(self.geometry);

        let page_tree_id = writer.bump();

        for font in writer.fonts.iter() {
            pdf.type1_font(font.id)
                .base_font(font.name)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for block in &self.blocks {
            match block {
                Block::Paragraph { spans, style } => self.layout_paragraph(&mut writer, spans, style),
                Block::Spacer(height) => writer.feed(*height),
                Block::PageBreak => writer.break_page(),
                Block::Table { rows, style } => self.layout_table(&mut writer, rows, style),
            }
        }

        debug!(
            "laid out {} blocks across {} pages",
            self.blocks.len(),
            writer.pages.len()
        );

        let fonts = writer.fonts;
        let pages = std::mem::take(&mut writer.pages);
        let page_ids: Vec<_> = pages.iter().map(|page| page.page_id).collect();

        for page in pages {
            streams.stream(page.content_id, &page.content.finish());

            let mut pdf_page = pdf.page(page.page_id);
            pdf_page.media_box(Rect::new(0.0, 0.0, self.geometry.width, self.geometry.height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(page.content_id);

            let mut resources = pdf_page.resources();
            let mut font_dict = resources.fonts();
            for font in fonts.iter() {
                font_dict.pair(font.name, font.id);
            }
            font_dict.finish();
            resources.finish();
            pdf_page.finish();
        }

        pdf.extend(&streams);

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        pdf.catalog(writer.bump()).pages(page_tree_id);

        Ok(pdf.finish())
    }

    /// renders and writes the PDF in one shot; the bytes are fully
    /// materialized before the filesystem is touched, so a failed write
    /// never leaves a readable partial file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let bytes = self.render()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// breaks the spans of one paragraph into measured lines and hands the
    /// assembled `TextBlock` to the writer
    fn layout_paragraph(&self, writer: &mut Writer, spans: &[Span], style: &Style) {
        writer.feed(style.space_before);

        let writable = self.geometry.writable_width() - style.left_indent;
        let mut block = TextBlock::new(style);

        for (span_index, span) in spans.iter().enumerate() {
            let face = span.face.unwrap_or(style.face);
            let space_width = Helvetica.advance(' ', face, style.size);
            // a span that opens with whitespace joins the previous span
            // with a measured gap instead of a glyph
            let joins_with_gap = span_index > 0 && span.text.starts_with(char::is_whitespace);

            for (word_index, text) in span.text.split_whitespace().enumerate() {
                let width = Helvetica.text_width(text, face, style.size);
                let gap = word_index > 0 || joins_with_gap;
                let mut offset = if gap && !block.current().body.is_empty() {
                    space_width
                } else {
                    0.0
                };

                if !block.current().body.is_empty()
                    && block.current().width + offset + width > writable
                {
                    block.break_line();
                    offset = 0.0;
                }

                block.current().push(Word {
                    text,
                    face,
                    width,
                    offset,
                });
            }
        }

        match style.alignment {
            Alignment::Left => {}
            Alignment::Center => {
                for line in &mut block.lines {
                    if line.width < writable {
                        line.offset = (writable - line.width) / 2.0;
                    }
                }
            }
            Alignment::Right => {
                for line in &mut block.lines {
                    if line.width < writable {
                        line.offset = writable - line.width;
                    }
                }
            }
        }

        writer.write(&block);
        writer.feed(style.space_after);
    }

    /// lays a table out as one line per row with equal column widths;
    /// cells are clipped to their column, not wrapped
    fn layout_table(&self, writer: &mut Writer, rows: &[Vec<String>], style: &Style) {
        let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        writer.feed(style.space_before);

        let writable = self.geometry.writable_width() - style.left_indent;
        let column_width = writable / columns as f32;
        let space_width = Helvetica.advance(' ', style.face, style.size);

        for row in rows {
            let mut block = TextBlock::new(style);
            let mut consumed = 0.0;

            for (column, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }

                let width = Helvetica.text_width(cell, style.face, style.size);
                let column_start = column as f32 * column_width;
                // an oversized cell pushes the next one right by a space
                let offset = (column_start - consumed).max(if column == 0 { 0.0 } else { space_width });

                block.current().push(Word {
                    text: cell.as_str(),
                    face: style.face,
                    width,
                    offset,
                });

                consumed += offset + width;
            }

            writer.write(&block);
        }

        writer.feed(style.space_after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleSheet;

    fn doc_with(blocks: Vec<Block>) -> Doc {
        let mut doc = Doc::new(PageGeometry::default());
        for block in blocks {
            doc = doc.block(block);
        }
        doc
    }

    #[test]
    fn render_produces_pdf_bytes() {
        let styles = StyleSheet::default();
        let doc = doc_with(vec![
            Block::paragraph("Wendeel Marinho", &styles.title),
            Block::Spacer(7.2),
            Block::paragraph("A single body paragraph.", &styles.body),
        ]);

        let bytes = doc.render().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(!bytes.is_empty());
    }

    #[test]
    fn render_is_deterministic() {
        let styles = StyleSheet::default();
        let doc = doc_with(vec![
            Block::paragraph("PROFESSIONAL SUMMARY", &styles.heading),
            Block::paragraph("Ten years building systems end-to-end.", &styles.body),
        ]);

        assert_eq!(doc.render().unwrap(), doc.render().unwrap());
    }

    #[test]
    fn long_paragraph_wraps_instead_of_overflowing() {
        let styles = StyleSheet::default();
        let text = "architecture ".repeat(120);
        let doc = doc_with(vec![Block::paragraph(text, &styles.body)]);

        // must not panic and must stay a valid single-stream render
        let bytes = doc.render().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn page_break_forces_a_second_page() {
        let styles = StyleSheet::default();
        let doc = doc_with(vec![
            Block::paragraph("first page", &styles.body),
            Block::PageBreak,
            Block::paragraph("second page", &styles.body),
        ]);

        let bytes = doc.render().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        // page tree count reflects the forced boundary
        assert!(text.contains("/Count 2"));
        assert!(!text.contains("/Count 1"));
    }

    #[test]
    fn table_renders_one_line_per_row() {
        let styles = StyleSheet::default();
        let rows = vec![
            vec!["Skill".to_string(), "Level".to_string()],
            vec!["Rust".to_string(), "Production".to_string()],
        ];
        let doc = doc_with(vec![Block::Table {
            rows,
            style: styles.body.clone(),
        }]);

        let bytes = doc.render().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
