use log::warn;
use pagescript_script::Token;
use pagescript_script::values::parse_number;
use pagescript_types::{FontFamily, FontSpec, FontStyle, color};

use super::{parse_color, value};
use crate::error::ScriptError;
use crate::state::LayoutState;

const STYLES: [&str; 4] = ["regular", "bold", "italic", "bolditalic"];

/// `font size <n> [style <s>] [colour <c>] "<family>"` — replaces the
/// whole current font state; omitted style and colour fall back to
/// their defaults rather than the previous values.
pub fn execute(state: &mut LayoutState, tokens: &[Token]) -> Result<(), ScriptError> {
    let mut size = None;
    let mut style = FontStyle::Regular;
    let mut font_color = color::BLACK;
    let mut name = None;

    let mut i = 1;
    while i < tokens.len() {
        let t = tokens[i].as_str();
        if t.eq_ignore_ascii_case("size") {
            size = Some(parse_number(value(tokens, &mut i, "size")?)?);
        } else if t.eq_ignore_ascii_case("style") {
            let s = value(tokens, &mut i, "style")?;
            if !STYLES.contains(&s.to_ascii_lowercase().as_str()) {
                warn!("unknown font style '{s}', using regular");
            }
            style = FontStyle::parse(s);
        } else if t.eq_ignore_ascii_case("colour") || t.eq_ignore_ascii_case("color") {
            font_color = parse_color(value(tokens, &mut i, "colour")?)?;
        } else {
            name = Some(t);
        }
        i += 1;
    }

    let size = size.ok_or_else(|| ScriptError::Argument("font requires size".to_string()))?;
    let name = name.ok_or_else(|| ScriptError::Argument("font requires a font name".to_string()))?;

    state.font = FontSpec::new(FontFamily::from_name(name), style);
    state.font_size = size;
    state.font_color = font_color;
    Ok(())
}
