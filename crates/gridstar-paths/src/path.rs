use gridstar_core::Coord;

/// A found path, from start to goal inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathDoc"))]
pub struct Path {
    cells: Vec<Coord>,
    cost: f64,
}

/// Unchecked serialised form of a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathDoc {
    cells: Vec<Coord>,
    cost: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PathDoc> for Path {
    type Error = &'static str;

    fn try_from(doc: PathDoc) -> Result<Self, Self::Error> {
        if doc.cells.is_empty() {
            return Err("path has no cells");
        }
        if !(doc.cost.is_finite() && doc.cost >= 0.0) {
            return Err("path cost must be finite and non-negative");
        }
        Ok(Self::new(doc.cells, doc.cost))
    }
}

impl Path {
    pub(crate) fn new(cells: Vec<Coord>, cost: f64) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// The coordinates visited, in order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Accumulated step cost. Equals [`steps`](Self::steps) under the
    /// default unit step cost.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of moves, one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Result of a search that ran to completion.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found(Path),
    /// The frontier emptied before the goal was reached: no path exists.
    NotFound,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<f64> {
        self.path().map(Path::cost)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded (the goal included).
    pub expanded: usize,
    /// Nodes created, i.e. distinct positions that entered the frontier.
    pub generated: usize,
    /// Open nodes whose cost was lowered through a cheaper parent.
    pub relaxed: usize,
    /// Largest number of simultaneously open nodes.
    pub peak_frontier: usize,
}
