//! Search configuration.
//!
//! With the `serde` feature every field is optional in a serialised
//! document; missing fields take their [`Default`] values.

use gridstar_core::Coord;

use crate::error::PathError;
use crate::heuristic::HeuristicKind;

/// Price of a single move between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepCost {
    /// Every one of the 8 moves costs the same. Diagonals are not charged
    /// extra for the longer distance they cover.
    Uniform(f64),
    /// Axis-aligned and diagonal moves are priced separately.
    Directional { orthogonal: f64, diagonal: f64 },
}

impl Default for StepCost {
    fn default() -> Self {
        StepCost::Uniform(1.0)
    }
}

impl StepCost {
    /// Cost of moving from `from` to the adjacent cell `to`.
    #[inline]
    pub fn cost(&self, from: Coord, to: Coord) -> f64 {
        match *self {
            StepCost::Uniform(c) => c,
            StepCost::Directional {
                orthogonal,
                diagonal,
            } => {
                if from.is_diagonal_to(to) {
                    diagonal
                } else {
                    orthogonal
                }
            }
        }
    }

    /// Every price must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), PathError> {
        let check = |c: f64| {
            if c.is_finite() && c > 0.0 {
                Ok(())
            } else {
                Err(PathError::InvalidStepCost(c))
            }
        };
        match *self {
            StepCost::Uniform(c) => check(c),
            StepCost::Directional {
                orthogonal,
                diagonal,
            } => check(orthogonal).and(check(diagonal)),
        }
    }
}

/// How the frontier picks the next node to expand.
///
/// Both strategies select the same node at every step: lowest `f`, ties going
/// to the node that entered the frontier first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrontierKind {
    /// Binary heap with lazily discarded stale entries. O(log n) per pop.
    #[default]
    Heap,
    /// Insertion-ordered list scanned for the minimum. O(n) per pop.
    Scan,
}

/// What to do when the start or goal is on a blocked cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockedEndpoints {
    /// Fail with [`PathError::BlockedEndpoint`] before searching.
    #[default]
    Reject,
    /// Search anyway. A blocked goal is never entered, so the result is
    /// `NotFound` unless start and goal coincide; a blocked start can still
    /// be left through its passable neighbours.
    Search,
}

/// Parameters of a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Heuristic used by [`PathFinder::from_config`](crate::PathFinder::from_config).
    pub heuristic: HeuristicKind,
    pub step_cost: StepCost,
    pub frontier: FrontierKind,
    pub blocked_endpoints: BlockedEndpoints,
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_step_cost(mut self, step_cost: StepCost) -> Self {
        self.step_cost = step_cost;
        self
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_blocked_endpoints(mut self, policy: BlockedEndpoints) -> Self {
        self.blocked_endpoints = policy;
        self
    }

    /// Reject configurations no search could run with.
    pub fn validate(&self) -> Result<(), PathError> {
        self.step_cost.validate()
    }
}
