use gridstar_core::{Coord, Grid};
use log::{debug, trace, warn};

use crate::config::{BlockedEndpoints, FrontierKind, SearchConfig};
use crate::error::{Endpoint, PathError};
use crate::frontier::{Frontier, HeapFrontier, ScanFrontier};
use crate::heuristic::{Builtin, Heuristic};
use crate::node::NodePool;
use crate::path::{Outcome, Path, SearchStats};

/// A* search over an 8-connected [`Grid`].
///
/// A `PathFinder` only holds its heuristic and configuration; every call
/// builds its own node pool, frontier and explored set. One finder can
/// therefore serve many queries, including concurrent ones on a shared grid.
#[derive(Debug, Clone)]
pub struct PathFinder<H = Builtin> {
    heuristic: H,
    config: SearchConfig,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::from_config(SearchConfig::default())
    }
}

impl PathFinder {
    /// A finder using the built-in heuristic named by `config.heuristic`.
    pub fn from_config(config: SearchConfig) -> Self {
        let heuristic = config.heuristic.build(config.step_cost);
        Self { heuristic, config }
    }
}

impl<H: Heuristic> PathFinder<H> {
    /// A finder with a custom heuristic. `config.heuristic` is ignored.
    pub fn new(heuristic: H, config: SearchConfig) -> Self {
        Self { heuristic, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Find a path from `start` to `goal`.
    ///
    /// Returns [`Outcome::NotFound`] when the goal cannot be reached, and an
    /// error when the query itself is invalid: an endpoint off the grid, a
    /// blocked endpoint under [`BlockedEndpoints::Reject`], a bad step cost,
    /// or a heuristic producing a negative or non-finite estimate.
    pub fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Outcome, PathError> {
        self.find_path_with_stats(grid, start, goal)
            .map(|(outcome, _)| outcome)
    }

    /// Like [`find_path`](Self::find_path), also returning search counters.
    pub fn find_path_with_stats(
        &self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<(Outcome, SearchStats), PathError> {
        self.config.validate()?;
        self.check_endpoint(grid, Endpoint::Start, start)?;
        self.check_endpoint(grid, Endpoint::Goal, goal)?;

        debug!(
            "search {start} -> {goal} on {}x{} grid ({:?} frontier)",
            grid.rows(),
            grid.cols(),
            self.config.frontier
        );

        match self.config.frontier {
            FrontierKind::Heap => self.run(grid, start, goal, HeapFrontier::default()),
            FrontierKind::Scan => self.run(grid, start, goal, ScanFrontier::default()),
        }
    }

    fn check_endpoint(&self, grid: &Grid, endpoint: Endpoint, coord: Coord) -> Result<(), PathError> {
        if !grid.contains(coord) {
            warn!("rejecting {endpoint} {coord}: outside grid");
            return Err(PathError::OutOfBounds {
                endpoint,
                coord,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if self.config.blocked_endpoints == BlockedEndpoints::Reject && !grid.is_passable(coord) {
            warn!("rejecting {endpoint} {coord}: blocked cell");
            return Err(PathError::BlockedEndpoint { endpoint, coord });
        }
        Ok(())
    }

    fn estimate(&self, from: Coord, goal: Coord) -> Result<f64, PathError> {
        let value = self.heuristic.estimate(from, goal);
        if value.is_finite() && value >= 0.0 {
            // Fold -0.0 into 0.0 so both frontiers order it the same way.
            Ok(value + 0.0)
        } else {
            Err(PathError::InvalidHeuristic { coord: from, value })
        }
    }

    fn run<F: Frontier>(
        &self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        mut frontier: F,
    ) -> Result<(Outcome, SearchStats), PathError> {
        let mut pool = NodePool::with_capacity(grid.len().min(1024));
        let mut stats = SearchStats::default();

        let root = pool.insert(start, None, 0.0, self.estimate(start, goal)?);
        frontier.push(root, &pool);
        stats.peak_frontier = 1;

        while let Some(id) = frontier.pop(&pool) {
            pool.close(id);
            stats.expanded += 1;

            let (pos, g) = {
                let n = pool.node(id);
                (n.pos, n.g)
            };
            trace!("expand {pos} g={g} f={}", pool.node(id).f);

            if pos == goal {
                stats.generated = pool.len();
                let path = Path::new(pool.path_to(id), g);
                debug!(
                    "found path of {} steps, cost {} ({} expanded, {} generated)",
                    path.steps(),
                    path.cost(),
                    stats.expanded,
                    stats.generated
                );
                return Ok((Outcome::Found(path), stats));
            }

            for next in pos.neighbors_8() {
                // Off-grid and blocked cells alike.
                if !grid.is_passable(next) {
                    continue;
                }
                let existing = pool.get(next);
                if existing.is_some_and(|n| pool.node(n).closed) {
                    continue;
                }
                let next_g = g + self.config.step_cost.cost(pos, next);
                match existing {
                    None => {
                        let h = self.estimate(next, goal)?;
                        let child = pool.insert(next, Some(id), next_g, h);
                        frontier.push(child, &pool);
                    }
                    Some(n) if next_g < pool.node(n).g => {
                        pool.relax(n, id, next_g);
                        frontier.relaxed(n, &pool);
                        stats.relaxed += 1;
                    }
                    Some(_) => {}
                }
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        stats.generated = pool.len();
        debug!(
            "no path {start} -> {goal} ({} expanded, {} generated)",
            stats.expanded, stats.generated
        );
        Ok((Outcome::NotFound, stats))
    }
}
