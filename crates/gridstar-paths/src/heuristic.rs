//! Distance estimates used to order the frontier.
//!
//! Whether a search returns a minimum-cost path depends on the heuristic
//! matching the movement model: [`Chebyshev`] is consistent for unit-cost
//! 8-directional moves, [`Octile`] for separately priced orthogonal and
//! diagonal moves, and [`Manhattan`] overestimates as soon as diagonal moves are allowed.

use gridstar_core::Coord;

use crate::config::StepCost;

/// Estimate of the remaining cost from `from` to `goal`.
///
/// Estimates must be finite and non-negative. Any
/// `Fn(Coord, Coord) -> f64` is a heuristic.
pub trait Heuristic {
    fn estimate(&self, from: Coord, goal: Coord) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Coord, Coord) -> f64,
{
    #[inline]
    fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        self(from, goal)
    }
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Straight-line (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr.hypot(dc)
}

/// Straight-line distance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        euclidean(from, goal)
    }
}

/// Number of king moves, ignoring obstacles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    #[inline]
    fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        f64::from(chebyshev(from, goal))
    }
}

/// Number of axis-aligned moves, ignoring obstacles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        f64::from(manhattan(from, goal))
    }
}

/// Cheapest obstacle-free cost when orthogonal and diagonal moves are priced
/// separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octile {
    pub orthogonal: f64,
    pub diagonal: f64,
}

impl Default for Octile {
    fn default() -> Self {
        Self {
            orthogonal: 1.0,
            diagonal: std::f64::consts::SQRT_2,
        }
    }
}

impl Octile {
    /// Octile distance matching the prices of a step cost.
    pub fn for_step_cost(step: StepCost) -> Self {
        match step {
            StepCost::Uniform(c) => Self {
                orthogonal: c,
                diagonal: c,
            },
            StepCost::Directional {
                orthogonal,
                diagonal,
            } => Self {
                orthogonal,
                diagonal,
            },
        }
    }
}

impl Heuristic for Octile {
    fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        let dr = f64::from((from.row - goal.row).abs());
        let dc = f64::from((from.col - goal.col).abs());
        let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
        // A diagonal is only worth taking if it beats two orthogonal moves,
        // and a straight run can zigzag when diagonals are the cheaper move.
        let diagonal = self.diagonal.min(2.0 * self.orthogonal);
        let straight = self.orthogonal.min(self.diagonal);
        lo * diagonal + (hi - lo) * straight
    }
}

/// No estimate at all: A* degrades to uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Coord, _goal: Coord) -> f64 {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Configurable selection
// ---------------------------------------------------------------------------

/// Names one of the built-in heuristics, for use in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeuristicKind {
    Euclidean,
    #[default]
    Chebyshev,
    Manhattan,
    Octile,
    Zero,
}

impl HeuristicKind {
    /// Instantiate the heuristic. Only [`HeuristicKind::Octile`] depends on
    /// the step cost.
    pub fn build(self, step: StepCost) -> Builtin {
        match self {
            HeuristicKind::Euclidean => Builtin::Euclidean(Euclidean),
            HeuristicKind::Chebyshev => Builtin::Chebyshev(Chebyshev),
            HeuristicKind::Manhattan => Builtin::Manhattan(Manhattan),
            HeuristicKind::Octile => Builtin::Octile(Octile::for_step_cost(step)),
            HeuristicKind::Zero => Builtin::Zero(Zero),
        }
    }
}

/// One of the built-in heuristics, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Builtin {
    Euclidean(Euclidean),
    Chebyshev(Chebyshev),
    Manhattan(Manhattan),
    Octile(Octile),
    Zero(Zero),
}

impl Default for Builtin {
    fn default() -> Self {
        Builtin::Chebyshev(Chebyshev)
    }
}

impl Heuristic for Builtin {
    #[inline]
    fn estimate(&self, from: Coord, goal: Coord) -> f64 {
        match self {
            Builtin::Euclidean(h) => h.estimate(from, goal),
            Builtin::Chebyshev(h) => h.estimate(from, goal),
            Builtin::Manhattan(h) => h.estimate(from, goal),
            Builtin::Octile(h) => h.estimate(from, goal),
            Builtin::Zero(h) => h.estimate(from, goal),
        }
    }
}
