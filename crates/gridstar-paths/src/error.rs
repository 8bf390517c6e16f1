//! Search errors.
//!
//! Not finding a path is *not* an error; see [`Outcome::NotFound`](crate::Outcome::NotFound).

use std::fmt;

use gridstar_core::{Coord, GridError};

/// Which end of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// A query that could not be searched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// An endpoint lies outside the grid.
    #[error("{endpoint} {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// An endpoint is on a blocked cell and the configuration rejects that.
    #[error("{endpoint} {coord} is on a blocked cell")]
    BlockedEndpoint { endpoint: Endpoint, coord: Coord },
    /// A step cost that is not finite and strictly positive.
    #[error("step cost must be finite and positive, got {0}")]
    InvalidStepCost(f64),
    /// The heuristic returned a negative or non-finite estimate.
    #[error("heuristic returned {value} at {coord}; estimates must be finite and non-negative")]
    InvalidHeuristic { coord: Coord, value: f64 },
    /// The grid itself is malformed.
    #[error(transparent)]
    InvalidGrid(#[from] GridError),
}
