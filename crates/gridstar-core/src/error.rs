//! Errors raised while building a [`Grid`](crate::Grid).

/// A grid could not be built from the supplied rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows, or rows with no cells.
    #[error("grid has no cells")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The grid is too large to address with `i32` coordinates.
    #[error("grid of {rows}x{cols} cells exceeds the coordinate range")]
    TooLarge { rows: usize, cols: usize },
}
