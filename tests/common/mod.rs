use std::path::PathBuf;

use pagescript::{InterpreterConfig, RecordingBackend, RunError, run_script};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs a script against a fresh recording backend with the default
/// configuration.
pub fn run_recorded(script: &str) -> Result<(RecordingBackend, PathBuf), RunError> {
    let mut backend = RecordingBackend::new();
    let path = run_script(script, &mut backend, &InterpreterConfig::default(), None)?;
    Ok((backend, path))
}
