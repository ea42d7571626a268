//! Interpreter for a compact line-oriented scripting language that
//! describes printable documents: pages, styled text, tables, images,
//! and interactive form fields. Statements are `.`-separated; the
//! interpreter drives an abstract document backend, keeping the layout
//! algorithms independent of any PDF library.
//!
//! ```no_run
//! use pagescript::{InterpreterConfig, PdfBackend, run_script};
//!
//! let script = r#"output "hello.pdf". font size 14 "Helvetica". print "Hello"."#;
//! let mut backend = PdfBackend::new();
//! let path = run_script(script, &mut backend, &InterpreterConfig::default(), None)?;
//! # Ok::<(), pagescript::RunError>(())
//! ```

pub mod commands;
mod config;
mod error;
mod interpreter;
mod state;

pub use config::InterpreterConfig;
pub use error::{RunError, ScriptError};
pub use interpreter::run_script;
pub use state::LayoutState;

pub use pagescript_render_core::{DocumentBackend, DrawEvent, FormControl, RecordingBackend};
pub use pagescript_render_lopdf::PdfBackend;
