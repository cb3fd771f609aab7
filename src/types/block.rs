use crate::types::{Face, Style};

/// A run of text within a paragraph. A span may override the paragraph
/// style's face, which is how the bolded lead-ins of the skill, education
/// and project lines are expressed.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub face: Option<Face>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            face: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            face: Some(Face::Bold),
        }
    }
}

/// One immutable unit of document layout. Blocks are appended once to the
/// `Doc` in authoring order and never re-sorted.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph { spans: Vec<Span>, style: Style },
    /// vertical gap in points
    Spacer(f32),
    /// forced page boundary, honored regardless of remaining space
    PageBreak,
    Table { rows: Vec<Vec<String>>, style: Style },
}

impl Block {
    /// single-span paragraph in the given style
    pub fn paragraph(text: impl Into<String>, style: &Style) -> Block {
        Block::Paragraph {
            spans: vec![Span::plain(text)],
            style: style.clone(),
        }
    }

    /// multi-span paragraph, used for bold-label lines
    pub fn rich(spans: Vec<Span>, style: &Style) -> Block {
        Block::Paragraph {
            spans,
            style: style.clone(),
        }
    }

    /// concatenated text of a paragraph, empty for non-paragraph blocks
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph { spans, .. } => {
                spans.iter().map(|span| span.text.as_str()).collect()
            }
            _ => String::new(),
        }
    }
}
