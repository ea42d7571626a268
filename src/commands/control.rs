use pagescript_render_core::{DocumentBackend, FormControl};
use pagescript_script::Token;
use pagescript_script::values::{parse_cell, parse_count, parse_point};
use pagescript_types::{Point, Rect};

use super::value;
use crate::error::ScriptError;
use crate::state::LayoutState;

/// Inset used to fit a widget inside its cell.
const CELL_INSET: f32 = 4.0;
/// Default widget box when no cell is given.
const DEFAULT_WIDTH: f32 = 180.0;
const DEFAULT_HEIGHT: f32 = 18.0;
/// Fixed cursor drop after placing a widget.
const CONTROL_GAP: f32 = 14.0;

/// Argument keywords that terminate the dropdown option token.
fn is_keyword(t: &str) -> bool {
    matches!(
        t.to_ascii_lowercase().as_str(),
        "content" | "@" | "@cell" | "cell" | "group" | "selected" | "max" | "maxlength"
    )
}

/// `control [@ x,y | @cell c,r] type <t> [...]` — places one
/// interactive form widget. Radios accumulate into the logical field
/// named by their group; everything else is a standalone field.
pub fn execute<B: DocumentBackend>(
    state: &mut LayoutState,
    backend: &mut B,
    tokens: &[Token],
) -> Result<(), ScriptError> {
    let mut at: Option<Point> = None;
    let mut cell: Option<(usize, usize)> = None;
    let mut kind: Option<&str> = None;
    let mut options: Option<&str> = None;
    let mut content: Option<&str> = None;
    let mut group: Option<&str> = None;
    let mut selected: Option<&str> = None;
    let mut max_len: Option<usize> = None;

    let mut i = 1;
    while i < tokens.len() {
        let t = tokens[i].as_str();
        if t == "@" {
            at = Some(parse_point(value(tokens, &mut i, "@")?)?);
        } else if t.eq_ignore_ascii_case("@cell") || t.eq_ignore_ascii_case("cell") {
            cell = Some(parse_cell(value(tokens, &mut i, "@cell")?)?);
        } else if t.eq_ignore_ascii_case("type") {
            kind = Some(value(tokens, &mut i, "type")?);
            // A dropdown may be followed directly by its ;-separated
            // option list, distinguished from the next keyword.
            if kind.is_some_and(|k| k.eq_ignore_ascii_case("dropdown"))
                && let Some(next) = tokens.get(i + 1)
                && !is_keyword(next.as_str())
            {
                i += 1;
                options = Some(tokens[i].as_str());
            }
        } else if t.eq_ignore_ascii_case("content") {
            content = Some(value(tokens, &mut i, "content")?);
        } else if t.eq_ignore_ascii_case("group") {
            group = Some(value(tokens, &mut i, "group")?);
        } else if t.eq_ignore_ascii_case("selected") {
            selected = Some(value(tokens, &mut i, "selected")?);
        } else if t.eq_ignore_ascii_case("max") || t.eq_ignore_ascii_case("maxlength") {
            max_len = Some(parse_count(value(tokens, &mut i, "max")?)?);
        }
        i += 1;
    }

    let kind = kind.ok_or_else(|| ScriptError::Argument("control needs a type".to_string()))?;

    let (anchor, box_width, box_height) = match cell {
        Some((c, r)) => {
            let table = state.table.as_ref().ok_or_else(|| {
                ScriptError::State("control @cell requires an active table".to_string())
            })?;
            let x = table.column_x(c)? + CELL_INSET;
            let y = table.row_top_y(r)? - CELL_INSET - 2.0;
            let w = (table.col_width(c)? - 2.0 * CELL_INSET).max(30.0);
            let h = (table.row_height(r)? - 2.0 * CELL_INSET).clamp(14.0, 22.0);
            (Point::new(x, y), w, h)
        }
        None => (at.unwrap_or(state.cursor), DEFAULT_WIDTH, DEFAULT_HEIGHT),
    };

    let control = match kind.to_ascii_lowercase().as_str() {
        "textbox" => FormControl::TextBox {
            value: content.map(str::to_string),
            max_len: max_len.filter(|n| *n > 0),
        },
        "dropdown" => FormControl::Dropdown {
            options: options
                .map(|o| o.split(';').map(str::to_string).collect())
                .unwrap_or_default(),
            value: content.map(str::to_string),
        },
        // `option` is the historical name for a checkbox.
        "checkbox" | "option" => FormControl::CheckBox {
            checked: content.is_some_and(|c| c.eq_ignore_ascii_case("true") || c == "1"),
        },
        "radio" => {
            let group = group
                .ok_or_else(|| ScriptError::Argument("radio needs group \"name\"".to_string()))?;
            let export = content
                .ok_or_else(|| ScriptError::Argument("radio needs content \"value\"".to_string()))?;
            FormControl::Radio {
                group: group.to_string(),
                export: export.to_string(),
                selected: selected == Some(export),
            }
        }
        other => {
            return Err(ScriptError::Argument(format!("unknown control type: {other}")));
        }
    };

    // Checkboxes and radio buttons get a square box.
    let width = match control {
        FormControl::CheckBox { .. } | FormControl::Radio { .. } => box_height,
        _ => box_width,
    };
    let rect = Rect::new(anchor.x, anchor.y - box_height, width, box_height);
    backend.create_form_field(&control, rect)?;

    state.cursor = Point::new(anchor.x, anchor.y - box_height - CONTROL_GAP);
    Ok(())
}
