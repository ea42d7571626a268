use log::debug;
use pagescript_layout::{GridStyle, TableGrid};
use pagescript_render_core::DocumentBackend;
use pagescript_script::Token;
use pagescript_script::values::{parse_count, parse_list, parse_number};
use pagescript_types::{Point, Rect};

use super::{parse_color, value};
use crate::config::InterpreterConfig;
use crate::error::ScriptError;
use crate::state::LayoutState;

/// Gap between a table and whatever stacks below it.
const TABLE_GAP: f32 = 10.0;

/// `table columns n rows m width <list> height <list> [lines c]
/// [background c] [thickness t]` — creates the active table anchored at
/// the cursor, draws its grid, and drops the cursor below it. Width and
/// height lists pad with their last value when shorter than the
/// declared count, so the column/row counts must be given first.
pub fn execute<B: DocumentBackend>(
    state: &mut LayoutState,
    backend: &mut B,
    tokens: &[Token],
    config: &InterpreterConfig,
) -> Result<(), ScriptError> {
    let mut cols: Option<usize> = None;
    let mut rows: Option<usize> = None;
    let mut widths: Option<Vec<f32>> = None;
    let mut heights: Option<Vec<f32>> = None;
    let mut style = GridStyle::default();

    let mut i = 1;
    while i < tokens.len() {
        let t = tokens[i].as_str();
        if t.eq_ignore_ascii_case("columns") {
            cols = Some(parse_count(value(tokens, &mut i, "columns")?)?);
        } else if t.eq_ignore_ascii_case("rows") {
            rows = Some(parse_count(value(tokens, &mut i, "rows")?)?);
        } else if t.eq_ignore_ascii_case("width") {
            widths = Some(parse_list(value(tokens, &mut i, "width")?, cols)?);
        } else if t.eq_ignore_ascii_case("height") {
            heights = Some(parse_list(value(tokens, &mut i, "height")?, rows)?);
        } else if t.eq_ignore_ascii_case("lines") {
            style.line_color = parse_color(value(tokens, &mut i, "lines")?)?;
        } else if t.eq_ignore_ascii_case("background") {
            style.fill_color = parse_color(value(tokens, &mut i, "background")?)?;
        } else if t.eq_ignore_ascii_case("thickness") {
            style.thickness = parse_number(value(tokens, &mut i, "thickness")?)?;
        }
        i += 1;
    }

    match (cols, rows) {
        (Some(c), Some(r)) if c > 0 && r > 0 => {}
        _ => return Err(ScriptError::Argument("table needs columns and rows".to_string())),
    }
    let widths = widths.ok_or_else(|| ScriptError::Argument("table needs a width list".to_string()))?;
    let heights = heights.ok_or_else(|| ScriptError::Argument("table needs a height list".to_string()))?;

    let (page_width, page_height) = backend.page_size();
    let total_height: f32 = heights.iter().sum();
    if config.break_oversize_table && state.cursor.y - total_height < config.margin {
        debug!("table of height {total_height} would cross the bottom margin, breaking page");
        backend.begin_page()?;
        state.start_page(page_height, config.margin);
    }

    let mut grid = TableGrid::new(state.cursor, widths, heights, style)
        .map_err(|e| ScriptError::Argument(e.to_string()))?;
    if config.fit_table_width {
        grid.fit_width(page_width - 2.0 * config.margin);
    }

    draw_grid(backend, &grid)?;

    state.cursor = Point::new(
        state.cursor.x,
        grid.anchor.y - grid.total_height() - TABLE_GAP,
    );
    state.table = Some(grid);
    Ok(())
}

/// Filled background, stroked outer border, then the interior column
/// and row boundaries.
fn draw_grid<B: DocumentBackend>(backend: &mut B, grid: &TableGrid) -> Result<(), ScriptError> {
    let width = grid.total_width();
    let height = grid.total_height();
    let outline = Rect::new(grid.anchor.x, grid.anchor.y - height, width, height);

    backend.draw_rect(outline, Some(grid.style.fill_color), None)?;
    backend.draw_rect(outline, None, Some((grid.style.line_color, grid.style.thickness)))?;

    for c in 1..grid.cols() {
        let x = grid.column_x(c)?;
        backend.draw_line(
            Point::new(x, grid.anchor.y),
            Point::new(x, grid.anchor.y - height),
            grid.style.line_color,
            grid.style.thickness,
        )?;
    }
    for r in 1..grid.rows() {
        let y = grid.row_top_y(r)?;
        backend.draw_line(
            Point::new(grid.anchor.x, y),
            Point::new(grid.anchor.x + width, y),
            grid.style.line_color,
            grid.style.thickness,
        )?;
    }
    Ok(())
}
