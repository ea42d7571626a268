//! Lexing for the page-description script: statement splitting,
//! tokenization with escape decoding, and typed value parsers.

mod splitter;
mod tokenizer;
pub mod values;

pub use splitter::split_statements;
pub use tokenizer::{Token, tokenize};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unclosed \" string")]
    UnterminatedString,
    #[error("unclosed \"\"\" string")]
    UnterminatedTripleString,
    #[error("bad escape: \\{0}")]
    BadEscape(char),
    #[error("dangling escape at end of string")]
    DanglingEscape,
}

/// Errors from the typed value parsers. These surface as argument
/// errors at the interpreter level.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("not a number: '{0}'")]
    Number(String),
    #[error("expected 'x,y', got '{0}'")]
    Point(String),
    #[error("expected 'col,row', got '{0}'")]
    Cell(String),
    #[error("empty numeric list: '{0}'")]
    EmptyList(String),
}
