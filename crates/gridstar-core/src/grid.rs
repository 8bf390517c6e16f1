//! The [`Grid`] type — an immutable rectangular matrix of [`Marker`]s.
//!
//! A `Grid` is validated once, at construction: it has at least one row and
//! one column, and every row has the same length. After that it is read-only,
//! so a single grid can be shared by reference between any number of
//! concurrent searches.

use crate::error::GridError;
use crate::geom::Coord;

// ---------------------------------------------------------------------------
// Marker
// ---------------------------------------------------------------------------

/// The content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Marker {
    #[default]
    Passable,
    Blocked,
}

impl Marker {
    /// Whether a path may enter a cell with this marker.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Marker::Passable)
    }
}

impl From<u8> for Marker {
    /// `0` is passable, anything else is blocked.
    fn from(v: u8) -> Self {
        if v == 0 {
            Marker::Passable
        } else {
            Marker::Blocked
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular, immutable grid of [`Marker`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Marker>>", into = "Vec<Vec<Marker>>")
)]
pub struct Grid {
    cells: Vec<Marker>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of markers.
    ///
    /// Fails with [`GridError::Empty`] if there are no cells and with
    /// [`GridError::Ragged`] if any row differs in length from the first.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = Marker>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut n_rows = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let found = cells.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: i,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            n_rows += 1;
        }
        let cols = cols.unwrap_or(0);
        Self::from_cells(cells, n_rows, cols)
    }

    /// Build a grid from a numeric matrix where `0` is passable and any other
    /// value is blocked.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|&v| Marker::from(v))),
        )
    }

    /// An all-passable grid of the given size.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::TooLarge { rows, cols })?;
        cells.resize(len, Marker::Passable);
        Self::from_cells(cells, rows, cols)
    }

    /// An all-passable grid of the given size with `blocked` cells set to
    /// [`Marker::Blocked`]. Coordinates outside the grid are ignored.
    pub fn with_blocked(
        rows: usize,
        cols: usize,
        blocked: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::open(rows, cols)?;
        for c in blocked {
            if let Some(i) = grid.index(c) {
                grid.cells[i] = Marker::Blocked;
            }
        }
        Ok(grid)
    }

    /// Cell count of a `rows` x `cols` grid, if it can be built at all.
    fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(GridError::TooLarge { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })
    }

    fn from_cells(cells: Vec<Marker>, rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        debug_assert_eq!(cells.len(), len);
        Ok(Self { cells, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        if r < self.rows && col < self.cols {
            Some(r * self.cols + col)
        } else {
            None
        }
    }

    /// Coordinate of a flat row-major index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The marker at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Marker> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Marker::is_passable)
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_passable()).count()
    }

    /// Row `r` as a slice, or `None` if out of bounds.
    pub fn row(&self, r: usize) -> Option<&[Marker]> {
        if r >= self.rows {
            return None;
        }
        Some(&self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Row-major iterator over `(Coord, Marker)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }
}

impl TryFrom<Vec<Vec<Marker>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Marker>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Marker>> {
    fn from(g: Grid) -> Self {
        g.cells.chunks(g.cols).map(<[Marker]>::to_vec).collect()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Marker)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Marker);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let m = *self.grid.cells.get(self.idx)?;
        let c = self.grid.coord(self.idx);
        self.idx += 1;
        Some((c, m))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.cells.len() - self.idx;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridIter<'_> {}
