//! One module per command. Every command takes the shared
//! `LayoutState` and, where it draws, the backend; argument walking is
//! keyword-driven and case-insensitive, with the last non-keyword token
//! winning for free-standing values (text, file path, font name).

pub mod control;
pub mod font;
pub mod image;
pub mod nextpage;
pub mod output;
pub mod print;
pub mod table;

use log::warn;
use pagescript_script::Token;
use pagescript_types::Color;

use crate::error::ScriptError;

/// The token following a keyword, or an argument error naming the
/// keyword that is missing its value.
fn value<'a>(tokens: &'a [Token], i: &mut usize, keyword: &str) -> Result<&'a str, ScriptError> {
    *i += 1;
    tokens
        .get(*i)
        .map(Token::as_str)
        .ok_or_else(|| ScriptError::Argument(format!("'{keyword}' needs a value")))
}

/// Color parsing with the documented lenient fallback made visible in
/// the log.
fn parse_color(token: &str) -> Result<Color, ScriptError> {
    let t = token.trim();
    let is_hex = t.starts_with("0x") || t.starts_with("0X") || t.starts_with('#');
    if !is_hex && Color::from_name(t).is_none() {
        warn!("unknown color name '{t}', using black");
    }
    Color::parse(t).map_err(ScriptError::Argument)
}
