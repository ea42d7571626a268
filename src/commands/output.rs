use std::fs;
use std::path::PathBuf;

use pagescript_render_core::RenderError;
use pagescript_script::Token;

use crate::error::ScriptError;
use crate::state::LayoutState;

/// `output "<path>"` — sets the output path and eagerly deletes any
/// pre-existing file there, so a failed run never leaves a stale
/// artifact behind.
pub fn execute(state: &mut LayoutState, tokens: &[Token]) -> Result<(), ScriptError> {
    let path = tokens
        .get(1)
        .map(Token::as_str)
        .ok_or_else(|| ScriptError::Argument("output needs a file name".to_string()))?;
    let path = PathBuf::from(path);
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            RenderError::Resource(format!("cannot delete '{}': {e}", path.display()))
        })?;
    }
    state.output = path;
    Ok(())
}
