use pagescript_render_core::DocumentBackend;

use crate::config::InterpreterConfig;
use crate::error::ScriptError;
use crate::state::LayoutState;

/// `nextpage` — closes the current page, opens a fresh one, homes the
/// cursor, and clears the active table. Font and output path persist.
pub fn execute<B: DocumentBackend>(
    state: &mut LayoutState,
    backend: &mut B,
    config: &InterpreterConfig,
) -> Result<(), ScriptError> {
    backend.begin_page()?;
    let (_, page_height) = backend.page_size();
    state.start_page(page_height, config.margin);
    Ok(())
}
