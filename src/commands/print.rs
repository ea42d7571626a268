use pagescript_layout::wrap;
use pagescript_render_core::DocumentBackend;
use pagescript_script::Token;
use pagescript_script::values::{parse_cell, parse_number, parse_point};
use pagescript_types::Point;

use super::value;
use crate::error::ScriptError;
use crate::state::LayoutState;

/// Inset used for `@cell` text anchors, in points.
const CELL_INSET: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Unrecognized alignment falls back to left, matching the other
    /// lenient keyword parses.
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("center") {
            Alignment::Center
        } else if s.eq_ignore_ascii_case("right") {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    fn offset(self, max_width: f32, line_width: f32) -> f32 {
        match self {
            Alignment::Left => 0.0,
            Alignment::Center => (max_width - line_width) / 2.0,
            Alignment::Right => max_width - line_width,
        }
    }
}

/// `print [@ x,y | @cell c,r] [width w] [alignment a] "<text>"` —
/// wraps when a width budget exists, draws each line justified within
/// it, then drops the cursor below the block.
pub fn execute<B: DocumentBackend>(
    state: &mut LayoutState,
    backend: &mut B,
    tokens: &[Token],
) -> Result<(), ScriptError> {
    let mut at: Option<Point> = None;
    let mut cell: Option<(usize, usize)> = None;
    let mut width: Option<f32> = None;
    let mut align = Alignment::Left;
    let mut text: Option<&str> = None;

    let mut i = 1;
    while i < tokens.len() {
        let t = tokens[i].as_str();
        if t == "@" {
            at = Some(parse_point(value(tokens, &mut i, "@")?)?);
        } else if t.eq_ignore_ascii_case("@cell") || t.eq_ignore_ascii_case("cell") {
            cell = Some(parse_cell(value(tokens, &mut i, "@cell")?)?);
        } else if t.eq_ignore_ascii_case("width") {
            width = Some(parse_number(value(tokens, &mut i, "width")?)?);
        } else if t.eq_ignore_ascii_case("alignment") {
            align = Alignment::parse(value(tokens, &mut i, "alignment")?);
        } else {
            text = Some(t);
        }
        i += 1;
    }

    let text = text.ok_or_else(|| ScriptError::Argument("print needs text".to_string()))?;

    let (anchor, max_width) = match cell {
        Some((c, r)) => {
            let table = state
                .table
                .as_ref()
                .ok_or_else(|| ScriptError::State("print @cell requires an active table".to_string()))?;
            let anchor = table.cell_text_anchor(c, r, CELL_INSET)?;
            let budget = match width {
                Some(w) => w,
                None => table.col_width(c)? - 2.0 * CELL_INSET,
            };
            (anchor, Some(budget))
        }
        None => (at.unwrap_or(state.cursor), width),
    };

    let line_height = state.line_height();
    let lines = match max_width {
        Some(w) => wrap(
            |s| backend.measure_text(state.font, state.font_size, s),
            w,
            text,
        ),
        None => vec![text.to_string()],
    };

    for (li, line) in lines.iter().enumerate() {
        let dx = match max_width {
            Some(w) => align.offset(w, backend.measure_text(state.font, state.font_size, line)),
            None => 0.0,
        };
        backend.draw_text(
            state.font,
            state.font_size,
            state.font_color,
            anchor.x + dx,
            anchor.y - line_height * li as f32,
            line,
        )?;
    }

    state.cursor = Point::new(anchor.x, anchor.y - line_height * (lines.len() as f32 + 1.0));
    Ok(())
}
