use crate::types::{Color, Face, Style};

/// A laid-out paragraph: one or more measured lines ready for the `Writer`.
/// Built by `Doc::layout_paragraph`, which wraps words against the writable
/// page width before any PDF operator is emitted.
pub struct TextBlock<'a> {
    pub lines: Vec<Line<'a>>,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub indent: f32,
}

impl<'a> TextBlock<'a> {
    /// starts with a single empty line in the style's typography
    pub fn new(style: &Style) -> Self {
        TextBlock {
            lines: vec![Line::new()],
            font_size: style.size,
            leading: style.leading,
            color: style.color,
            indent: style.left_indent,
        }
    }

    /// closes the current line and opens a fresh one
    pub fn break_line(&mut self) {
        self.lines.push(Line::new());
    }

    pub fn current(&mut self) -> &mut Line<'a> {
        // constructor guarantees at least one line
        self.lines.last_mut().unwrap()
    }
}

/// The words that fit one visual line, plus its measured width and the
/// horizontal offset applied by alignment.
#[derive(Debug)]
pub struct Line<'a> {
    pub body: Vec<Word<'a>>,
    pub width: f32,
    pub offset: f32,
}

impl<'a> Line<'a> {
    pub fn new() -> Self {
        Line {
            body: Vec::new(),
            width: 0.0,
            offset: 0.0,
        }
    }

    pub fn push(&mut self, word: Word<'a>) {
        self.width += word.offset + word.width;
        self.body.push(word);
    }
}

impl Default for Line<'_> {
    fn default() -> Self {
        Line::new()
    }
}

/// A measured word. `offset` is the horizontal gap preceding the word
/// (a space width mid-line, zero at line start, a column gap in tables).
#[derive(Debug)]
pub struct Word<'a> {
    pub text: &'a str,
    pub face: Face,
    pub width: f32,
    pub offset: f32,
}
