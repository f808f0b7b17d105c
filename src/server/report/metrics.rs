//! Standard Type1 font metrics and WinAnsi text encoding.
//!
//! Widths are the Helvetica and Helvetica-Bold AFM advance widths in 1/1000 em for the
//! printable ASCII range. Accented Latin letters use the width of their base letter.

/// The two standard fonts used by the PDF renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

/// Widths of ' ' (0x20) through '~' (0x7E).
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

const FALLBACK_WIDTH: u16 = 556;

/// Width of `text` in points when set in `font` at `size`.
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, font))).sum();
    units as f32 * size / 1000.0
}

fn glyph_width(c: char, font: Font) -> u16 {
    let table = match font {
        Font::Regular => &HELVETICA,
        Font::Bold => &HELVETICA_BOLD,
    };

    let ascii = |c: char| table[c as usize - 0x20];

    match c {
        ' '..='~' => ascii(c),
        '\u{a0}' => ascii(' '),
        '—' | '…' | 'Æ' | '‰' => 1000,
        '–' => 556,
        '•' => 350,
        '°' => 400,
        'ª' => 370,
        'º' => 365,
        _ => match base_letter(c) {
            Some(base) => ascii(base),
            None => FALLBACK_WIDTH,
        },
    }
}

/// Unaccented letter with the same advance width.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };

    Some(base)
}

/// Encodes text for a WinAnsi font. Unmappable characters become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_ascii_with_afm_widths() {
        // "Sala" = 667 + 556 + 222 + 556
        assert!((text_width("Sala", Font::Regular, 10.0) - 20.01).abs() < 0.001);
        // Bold "Sala" = 667 + 556 + 278 + 556
        assert!((text_width("Sala", Font::Bold, 10.0) - 20.57).abs() < 0.001);
    }

    #[test]
    fn accented_letters_match_their_base() {
        assert_eq!(
            text_width("ção", Font::Regular, 12.0),
            text_width("cao", Font::Regular, 12.0)
        );
        assert_eq!(
            text_width("Ímã", Font::Bold, 12.0),
            text_width("Ima", Font::Bold, 12.0)
        );
    }

    #[test]
    fn width_scales_with_size() {
        let small = text_width("Parede", Font::Regular, 10.0);
        let large = text_width("Parede", Font::Regular, 20.0);
        assert!((large - 2.0 * small).abs() < 0.001);
    }

    #[test]
    fn encodes_latin1_and_dashes() {
        assert_eq!(to_win_ansi("Cômodo"), vec![b'C', 0xf4, b'm', b'o', b'd', b'o']);
        assert_eq!(to_win_ansi("a — b"), vec![b'a', b' ', 0x97, b' ', b'b']);
        assert_eq!(to_win_ansi("✓"), vec![b'?']);
    }
}
