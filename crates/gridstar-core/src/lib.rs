//! **gridstar-core** — grid and coordinate types for the *gridstar* path
//! finder.
//!
//! This crate provides the data model shared by the search engine and its
//! callers: [`Coord`] (a row/column pair), the eight unit move offsets, and
//! the immutable [`Grid`] of [`Marker`]s that a search runs over.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Coord, OFFSETS};
pub use grid::{Grid, GridIter, Marker};
