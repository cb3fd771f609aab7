use crate::traits::FontMetrics;
use crate::types::Face;

/// Metric tables for the four Helvetica base-14 faces, taken from the Adobe
/// AFM files. The oblique faces share the widths of their upright
/// counterparts, so only two tables are needed. Widths are in 1/1000 em;
/// `widths[i]` covers ASCII character `i + 32` (0x20 space through 0x7E `~`).
pub struct Helvetica;

#[rustfmt::skip]
const REGULAR_WIDTHS: [u16; 95] = [
    // sp    !     "     #     $     %     &     '
     278,  278,  355,  556,  556,  889,  667,  191,
    //  (     )     *     +     ,     -     .     /
     333,  333,  389,  584,  278,  333,  278,  278,
    //  0 - 9
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
    //  :     ;     <     =     >     ?     @
     278,  278,  584,  584,  584,  556, 1015,
    //  A - Z
     667,  667,  722,  722,  667,  611,  778,  722,  278,  500,
     667,  556,  833,  722,  778,  667,  778,  722,  667,  611,
     722,  667,  944,  667,  667,  611,
    //  [     \     ]     ^     _     `
     278,  278,  278,  469,  556,  333,
    //  a - z
     556,  556,  500,  556,  556,  278,  556,  556,  222,  222,
     500,  222,  833,  556,  556,  556,  556,  333,  500,  278,
     556,  500,  722,  500,  500,  500,
    //  {     |     }     ~
     334,  260,  334,  584,
];

#[rustfmt::skip]
const BOLD_WIDTHS: [u16; 95] = [
    // sp    !     "     #     $     %     &     '
     278,  333,  474,  556,  556,  889,  722,  238,
    //  (     )     *     +     ,     -     .     /
     333,  333,  389,  584,  278,  333,  278,  278,
    //  0 - 9
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
    //  :     ;     <     =     >     ?     @
     333,  333,  584,  584,  584,  611,  975,
    //  A - Z
     722,  722,  722,  722,  667,  611,  778,  722,  278,  556,
     722,  611,  833,  722,  778,  667,  778,  722,  667,  611,
     722,  667,  944,  667,  667,  611,
    //  [     \     ]     ^     _     `
     333,  278,  333,  584,  556,  333,
    //  a - z
     556,  611,  556,  611,  556,  333,  611,  611,  278,  278,
     556,  278,  889,  611,  611,  611,  611,  389,  556,  333,
     611,  556,  778,  556,  556,  500,
    //  {     |     }     ~
     389,  280,  389,  584,
];

/// Accented Latin-1 letters carry the width of their base letter in the
/// Helvetica AFMs, so diacritics are stripped before the table lookup.
fn strip_diacritic(ch: char) -> char {
    match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => ch,
    }
}

fn lookup(table: &[u16; 95], ch: char) -> f32 {
    let code = ch as usize;
    if (0x20..=0x7E).contains(&code) {
        return table[code - 0x20] as f32;
    }

    match ch {
        '\u{2022}' => 350.0,  // bullet
        '\u{2013}' => 556.0,  // en dash
        '\u{2014}' => 1000.0, // em dash
        _ => {
            let base = strip_diacritic(ch);
            if base != ch {
                lookup(table, base)
            } else {
                // average lowercase width, close enough for the stray glyph
                556.0
            }
        }
    }
}

impl FontMetrics for Helvetica {
    fn regular(&self, ch: char) -> f32 {
        lookup(&REGULAR_WIDTHS, ch)
    }

    fn bold(&self, ch: char) -> f32 {
        lookup(&BOLD_WIDTHS, ch)
    }

    fn oblique(&self, ch: char) -> f32 {
        lookup(&REGULAR_WIDTHS, ch)
    }

    fn bold_oblique(&self, ch: char) -> f32 {
        lookup(&BOLD_WIDTHS, ch)
    }
}
