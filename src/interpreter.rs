use std::path::{Path, PathBuf};

use log::debug;
use pagescript_render_core::DocumentBackend;
use pagescript_script::{Token, split_statements, tokenize};

use crate::commands;
use crate::config::InterpreterConfig;
use crate::error::{RunError, ScriptError};
use crate::state::LayoutState;

/// The closed command set, resolved once per statement from its first
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Output,
    Font,
    Print,
    Table,
    NextPage,
    Image,
    Control,
}

impl Command {
    fn from_name(name: &str) -> Option<Command> {
        match name.to_ascii_lowercase().as_str() {
            "output" => Some(Command::Output),
            "font" => Some(Command::Font),
            "print" => Some(Command::Print),
            "table" => Some(Command::Table),
            "nextpage" => Some(Command::NextPage),
            "image" => Some(Command::Image),
            "control" => Some(Command::Control),
            _ => None,
        }
    }
}

/// Runs a script against `backend` and returns the path the document
/// was written to. `output_override` wins over any `output` statement
/// in the script.
///
/// Execution is strictly sequential: the first failing statement
/// aborts the run, and the error carries that statement's 1-based
/// index.
pub fn run_script<B: DocumentBackend>(
    source: &str,
    backend: &mut B,
    config: &InterpreterConfig,
    output_override: Option<&Path>,
) -> Result<PathBuf, RunError> {
    let statements = split_statements(source)?;
    let (_, page_height) = backend.page_size();
    let mut state = LayoutState::new(page_height, config.margin);
    backend.begin_page()?;

    for (idx, raw) in statements.iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        execute_statement(&mut state, backend, raw, config)
            .map_err(|source| RunError::Statement { index: idx + 1, source })?;
    }

    let output = match output_override {
        Some(p) => p.to_path_buf(),
        None => state.output,
    };
    backend.finalize(&output)?;
    Ok(output)
}

fn execute_statement<B: DocumentBackend>(
    state: &mut LayoutState,
    backend: &mut B,
    raw: &str,
    config: &InterpreterConfig,
) -> Result<(), ScriptError> {
    let tokens = tokenize(raw)?;
    let Some(first) = tokens.first().map(Token::as_str) else {
        return Ok(());
    };
    let command = Command::from_name(first)
        .ok_or_else(|| ScriptError::Argument(format!("unknown command '{first}'")))?;
    debug!("executing {command:?}");

    match command {
        Command::Output => commands::output::execute(state, &tokens),
        Command::Font => commands::font::execute(state, &tokens),
        Command::Print => commands::print::execute(state, backend, &tokens),
        Command::Table => commands::table::execute(state, backend, &tokens, config),
        Command::NextPage => commands::nextpage::execute(state, backend, config),
        Command::Image => commands::image::execute(state, backend, &tokens),
        Command::Control => commands::control::execute(state, backend, &tokens),
    }
}
