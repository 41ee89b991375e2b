//! Errors raised while turning a request into a searchable [Grid](crate::grid::Grid).
//!
//! Searching itself cannot fail: an unreachable end is reported through an empty path.
use thiserror::Error;

/// Which of the two endpoints an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    EmptyGrid,

    /// Row `row` has `len` cells where the grid has `size` rows.
    #[error("grid is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("invalid cell state code {0}, expected 0-5")]
    InvalidCellState(i64),

    #[error("no {0} cell in grid and no {0} coordinates given")]
    Missing(Endpoint),

    #[error("{endpoint} ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        row: i64,
        col: i64,
        size: usize,
    },

    #[error("{endpoint} ({row}, {col}) is a wall")]
    Blocked {
        endpoint: Endpoint,
        row: usize,
        col: usize,
    },
}
