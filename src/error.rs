use thiserror::Error;

/// Errors raised at the boundary of the grid model. The search algorithms themselves are total
/// and report an unreachable end node as an empty outcome rather than as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid is too large to index")]
    TooLarge { rows: usize, cols: usize },

    #[error("{role} node ({row}, {col}) lies outside the grid")]
    EndpointOutOfBounds {
        role: &'static str,
        row: usize,
        col: usize,
    },

    #[error("start and end must differ, both are ({row}, {col})")]
    StartEqualsEnd { row: usize, col: usize },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type GridResult<T> = Result<T, GridError>;
