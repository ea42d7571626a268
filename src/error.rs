use pagescript_layout::GridError;
use pagescript_render_core::RenderError;
use pagescript_script::{SyntaxError, ValueError};
use thiserror::Error;

/// Interpreter-level error taxonomy. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("argument error: {0}")]
    Argument(String),
    #[error("state error: {0}")]
    State(String),
    #[error("resource error: {0}")]
    Resource(#[from] RenderError),
}

impl From<ValueError> for ScriptError {
    fn from(e: ValueError) -> Self {
        ScriptError::Argument(e.to_string())
    }
}

impl From<GridError> for ScriptError {
    fn from(e: GridError) -> Self {
        ScriptError::State(e.to_string())
    }
}

/// A failed run, pinned to the offending statement where one exists.
#[derive(Error, Debug)]
pub enum RunError {
    /// The script could not be split into statements at all.
    #[error("{0}")]
    Parse(#[from] SyntaxError),
    /// A statement failed. The index is 1-based over the split
    /// statement list, blanks included, so it matches what the author
    /// sees in the source.
    #[error("statement {index}: {source}")]
    Statement {
        index: usize,
        #[source]
        source: ScriptError,
    },
    /// Page or document handling outside any single statement.
    #[error(transparent)]
    Render(#[from] RenderError),
}
