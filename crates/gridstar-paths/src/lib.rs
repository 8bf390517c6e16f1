//! A* shortest-path search over 8-connected grids.
//!
//! [`PathFinder`] searches a [`Grid`](gridstar_core::Grid) of passable and
//! blocked cells for a cheapest route between two coordinates, moving one
//! cell at a time in any of the eight directions.
//!
//! ```
//! use gridstar_core::{Coord, Grid};
//! use gridstar_paths::{Outcome, PathFinder};
//!
//! let grid = Grid::from_bits(&[
//!     [0u8, 1, 0],
//!     [0, 1, 0],
//!     [0, 0, 0],
//! ])
//! .unwrap();
//! let finder = PathFinder::default();
//! match finder.find_path(&grid, Coord::new(0, 0), Coord::new(0, 2)).unwrap() {
//!     Outcome::Found(path) => assert_eq!(path.steps(), 4),
//!     Outcome::NotFound => unreachable!(),
//! }
//! ```
//!
//! # Moving parts
//!
//! | Piece | Choices |
//! |---|---|
//! | [`Heuristic`] | [`Chebyshev`] (default), [`Euclidean`], [`Manhattan`], [`Octile`], [`Zero`], any closure |
//! | [`StepCost`] | uniform (default 1) or separate orthogonal/diagonal prices |
//! | [`FrontierKind`] | binary heap (default) or linear scan |
//! | [`BlockedEndpoints`] | reject (default) or search anyway |
//!
//! Every query runs in its own node pool; a [`PathFinder`] and a grid can be
//! shared freely between threads.

mod config;
mod error;
mod finder;
mod frontier;
mod heuristic;
mod node;
mod path;

pub use config::{BlockedEndpoints, FrontierKind, SearchConfig, StepCost};
pub use error::{Endpoint, PathError};
pub use finder::PathFinder;
pub use heuristic::{
    Builtin, Chebyshev, Euclidean, Heuristic, HeuristicKind, Manhattan, Octile, Zero, chebyshev,
    euclidean, manhattan,
};
pub use path::{Outcome, Path, SearchStats};
