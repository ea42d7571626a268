//! Glyph advance widths for the base-14 fonts, taken from the Adobe AFM
//! files that ship with every PDF viewer. Widths are in 1/1000 em for the
//! printable ASCII range; everything outside it falls back to the space
//! width of the font.

use pagescript_types::{FontFamily, FontSpec, FontStyle};

const ASCII_FIRST: usize = 0x20;
const ASCII_LAST: usize = 0x7E;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278,
    564, 564, 564, 444, 921, 722, 667, 667, 722, 611, 556, 722, 722, 333,
    389, 722, 611, 889, 722, 722, 556, 722, 667, 556, 611, 722, 722, 944,
    722, 722, 611, 333, 278, 333, 469, 500, 333, 444, 500, 444, 500, 444,
    333, 500, 500, 278, 278, 500, 278, 778, 500, 500, 500, 500, 333, 389,
    278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333,
    570, 570, 570, 500, 930, 722, 667, 722, 722, 667, 611, 778, 778, 389,
    500, 778, 667, 944, 722, 778, 611, 778, 722, 556, 667, 722, 722, 1000,
    722, 722, 667, 333, 278, 333, 581, 500, 333, 500, 556, 444, 556, 444,
    333, 500, 556, 278, 333, 556, 278, 833, 556, 500, 556, 556, 444, 389,
    333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333,
    675, 675, 675, 500, 920, 611, 611, 667, 722, 611, 611, 722, 722, 333,
    444, 667, 556, 833, 667, 722, 611, 722, 611, 500, 556, 722, 611, 833,
    611, 556, 556, 389, 278, 389, 422, 500, 333, 500, 500, 444, 500, 444,
    278, 500, 500, 278, 278, 444, 278, 722, 500, 500, 500, 500, 389, 389,
    278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_ITALIC: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333,
    570, 570, 570, 500, 832, 667, 667, 667, 722, 667, 667, 722, 778, 389,
    500, 667, 611, 889, 722, 722, 611, 722, 667, 556, 611, 722, 667, 889,
    667, 611, 611, 333, 278, 333, 570, 500, 333, 500, 500, 444, 500, 444,
    333, 500, 556, 278, 278, 500, 278, 778, 556, 500, 500, 500, 389, 389,
    278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

const COURIER_WIDTH: u16 = 600;

fn widths_for(spec: FontSpec) -> Option<&'static [u16; 95]> {
    match spec.family {
        FontFamily::Courier => None,
        FontFamily::Helvetica => match spec.style {
            FontStyle::Bold | FontStyle::BoldItalic => Some(&HELVETICA_BOLD),
            FontStyle::Regular | FontStyle::Italic => Some(&HELVETICA),
        },
        FontFamily::Times => match spec.style {
            FontStyle::Regular => Some(&TIMES_ROMAN),
            FontStyle::Bold => Some(&TIMES_BOLD),
            FontStyle::Italic => Some(&TIMES_ITALIC),
            FontStyle::BoldItalic => Some(&TIMES_BOLD_ITALIC),
        },
    }
}

/// Advance of a single character in 1/1000 em.
pub fn char_width(spec: FontSpec, c: char) -> u16 {
    match widths_for(spec) {
        None => COURIER_WIDTH,
        Some(table) => {
            let code = c as usize;
            if (ASCII_FIRST..=ASCII_LAST).contains(&code) {
                table[code - ASCII_FIRST]
            } else {
                table[0]
            }
        }
    }
}

/// Width of `text` in points when set in `spec` at `size`.
pub fn text_width(spec: FontSpec, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(spec, c))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_monospaced() {
        let spec = FontSpec::new(FontFamily::Courier, FontStyle::Regular);
        assert_eq!(text_width(spec, 10.0, "iiii"), text_width(spec, 10.0, "WWWW"));
        assert_eq!(text_width(spec, 10.0, "abcd"), 4.0 * 6.0);
    }

    #[test]
    fn helvetica_bold_is_wider_than_regular() {
        let regular = FontSpec::new(FontFamily::Helvetica, FontStyle::Regular);
        let bold = FontSpec::new(FontFamily::Helvetica, FontStyle::Bold);
        let text = "Quarterly report";
        assert!(text_width(bold, 12.0, text) > text_width(regular, 12.0, text));
    }

    #[test]
    fn oblique_shares_upright_widths() {
        let regular = FontSpec::new(FontFamily::Helvetica, FontStyle::Regular);
        let italic = FontSpec::new(FontFamily::Helvetica, FontStyle::Italic);
        assert_eq!(text_width(regular, 9.0, "slanted"), text_width(italic, 9.0, "slanted"));
    }

    #[test]
    fn known_helvetica_width() {
        // H=722 e=556 l=222 l=222 o=556 -> 2278/1000 * 10pt
        let spec = FontSpec::new(FontFamily::Helvetica, FontStyle::Regular);
        assert!((text_width(spec, 10.0, "Hello") - 22.78).abs() < 1e-3);
    }

    #[test]
    fn non_ascii_falls_back_to_space_width() {
        let spec = FontSpec::new(FontFamily::Times, FontStyle::Regular);
        assert_eq!(char_width(spec, 'é'), char_width(spec, ' '));
    }
}
