use std::path::Path;

use pagescript_render_core::DocumentBackend;
use pagescript_script::Token;
use pagescript_script::values::parse_point;
use pagescript_types::{Point, Rect};

use super::value;
use crate::error::ScriptError;
use crate::state::LayoutState;

/// Fixed cursor drop after placing an image.
const IMAGE_GAP: f32 = 10.0;

/// `image [@ x,y] [size w,h] "<path>"` — the anchor is the top-left
/// corner of the image box; without `size` the image's natural pixel
/// size is used.
pub fn execute<B: DocumentBackend>(
    state: &mut LayoutState,
    backend: &mut B,
    tokens: &[Token],
) -> Result<(), ScriptError> {
    let mut at: Option<Point> = None;
    let mut size: Option<Point> = None;
    let mut file: Option<&str> = None;

    let mut i = 1;
    while i < tokens.len() {
        let t = tokens[i].as_str();
        if t == "@" {
            at = Some(parse_point(value(tokens, &mut i, "@")?)?);
        } else if t.eq_ignore_ascii_case("size") {
            size = Some(parse_point(value(tokens, &mut i, "size")?)?);
        } else {
            file = Some(t);
        }
        i += 1;
    }

    let file = file.ok_or_else(|| ScriptError::Argument("image needs a file path".to_string()))?;
    let path = Path::new(file);
    let anchor = at.unwrap_or(state.cursor);

    let (width, height) = match size {
        Some(p) => (p.x, p.y),
        None => backend.image_size(path)?,
    };
    backend.draw_image(path, Rect::new(anchor.x, anchor.y - height, width, height))?;

    state.cursor = Point::new(anchor.x, anchor.y - IMAGE_GAP);
    Ok(())
}
