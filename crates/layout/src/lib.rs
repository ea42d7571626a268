//! Layout algorithms: greedy text wrapping against an injected width
//! measure, and table grid geometry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("cell ({col},{row}) out of bounds for {cols}x{rows} table")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
    #[error("table requires at least one column and one row")]
    Empty,
    #[error("column widths and row heights must all be positive")]
    NonPositive,
}

mod table;
mod wrap;

pub use table::{GridStyle, TableGrid};
pub use wrap::wrap;
