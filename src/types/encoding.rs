/// Encodes text for the Type1 base fonts, which this crate registers with
/// the predefined WinAnsiEncoding (cp1252). Latin-1 codepoints map straight
/// through; the handful of General Punctuation characters the content uses
/// sit in the 0x80..0x9F window. Anything unmappable degrades to `?` rather
/// than producing a wrong glyph.
pub fn winansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7E}' => ch as u8,
        '\u{A0}'..='\u{FF}' => ch as u8,
        '\u{20AC}' => 0x80, // €
        '\u{2026}' => 0x85, // …
        '\u{2018}' => 0x91, // '
        '\u{2019}' => 0x92, // '
        '\u{201C}' => 0x93, // "
        '\u{201D}' => 0x94, // "
        '\u{2022}' => 0x95, // •
        '\u{2013}' => 0x96, // –
        '\u{2014}' => 0x97, // —
        '\u{2122}' => 0x99, // ™
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(winansi("CTO / Tech Lead"), b"CTO / Tech Lead".to_vec());
    }

    #[test]
    fn latin1_and_punctuation_map_to_cp1252() {
        assert_eq!(winansi("ã"), vec![0xE3]);
        assert_eq!(winansi("É"), vec![0xC9]);
        assert_eq!(winansi("•"), vec![0x95]);
        assert_eq!(winansi("—"), vec![0x97]);
    }

    #[test]
    fn unmappable_becomes_question_mark() {
        assert_eq!(winansi("☃"), vec![b'?']);
    }
}
