use std::collections::VecDeque;

use gridstar_core::{Coord, Grid, OFFSETS};
use gridstar_paths::{
    BlockedEndpoints, Chebyshev, Euclidean, FrontierKind, HeuristicKind, Outcome, Path,
    PathError, PathFinder, SearchConfig, StepCost, Zero,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

/// Unit-cost 8-directional distances by breadth-first search.
fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.index(start)?] = 0;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.index(p)?];
        if p == goal {
            return Some(d);
        }
        for off in OFFSETS {
            let n = p + off;
            if !grid.is_passable(n) {
                continue;
            }
            let Some(i) = grid.index(n) else { continue };
            if dist[i] == usize::MAX {
                dist[i] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn assert_valid(grid: &Grid, path: &Path, start: Coord, goal: Coord) {
    assert_eq!(path.start(), start);
    assert_eq!(path.goal(), goal);
    for w in path.cells().windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a unit move", w[0], w[1]);
    }
    for &p in path {
        assert!(grid.is_passable(p), "{p} is blocked");
    }
}

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> Grid {
    let rows: Vec<Vec<u8>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    let r: f64 = rng.random();
                    u8::from(r < density)
                })
                .collect()
        })
        .collect();
    Grid::from_bits(&rows).unwrap()
}

// ---------------------------------------------------------------------------
// Preset maps
// ---------------------------------------------------------------------------

fn wall_with_gaps() -> Grid {
    // Column 4 blocked on rows 0-4 and 7-8.
    let mut rows = vec![[0u8; 10]; 10];
    for r in (0..5).chain(7..9) {
        rows[r][4] = 1;
    }
    Grid::from_bits(&rows).unwrap()
}

fn hanoi() -> Grid {
    let mut rows = vec![[0u8; 10]; 10];
    for r in (0..5).chain(6..9) {
        rows[r][4] = 1;
    }
    Grid::from_bits(&rows).unwrap()
}

fn sai_gon() -> Grid {
    Grid::from_bits(&[
        [0u8, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 1, 1, 1, 1, 0],
        [0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
        [0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    ])
    .unwrap()
}

fn da_lat() -> Grid {
    Grid::from_bits(&[
        [0u8, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn routes_around_wall() {
    init_logger();
    let grid = wall_with_gaps();
    let (start, goal) = (c(0, 0), c(7, 6));
    let path = PathFinder::default()
        .find_path(&grid, start, goal)
        .unwrap()
        .into_path()
        .expect("path exists");
    assert_valid(&grid, &path, start, goal);
    assert_eq!(Some(path.steps()), bfs_distance(&grid, start, goal));
    assert_eq!(path.steps(), 7);
    assert_eq!(path.cost(), 7.0);
    assert!(path.cells().contains(&c(5, 4)) || path.cells().contains(&c(6, 4)));
    assert_eq!(
        path.cells(),
        &[c(0, 0), c(1, 0), c(2, 1), c(3, 2), c(4, 3), c(5, 4), c(6, 5), c(7, 6)]
    );
}

#[test]
fn preset_maps_match_bfs() {
    init_logger();
    let cases = [
        (hanoi(), c(0, 0), c(7, 6), 7),
        (sai_gon(), c(0, 0), c(8, 9), 14),
        (da_lat(), c(0, 0), c(9, 9), 11),
        (da_lat(), c(0, 0), c(0, 9), 11),
    ];
    for (grid, start, goal, steps) in cases {
        for kind in [HeuristicKind::Chebyshev, HeuristicKind::Euclidean, HeuristicKind::Zero] {
            let finder = PathFinder::from_config(SearchConfig::default().with_heuristic(kind));
            let path = finder
                .find_path(&grid, start, goal)
                .unwrap()
                .into_path()
                .expect("path exists");
            assert_valid(&grid, &path, start, goal);
            assert_eq!(path.steps(), steps, "{kind:?} {start} -> {goal}");
            assert_eq!(bfs_distance(&grid, start, goal), Some(steps));
        }
    }
}

#[test]
fn walled_in_goal_not_found() {
    let mut rows = vec![[0u8; 7]; 7];
    for i in 2..5 {
        rows[2][i] = 1;
        rows[4][i] = 1;
        rows[i][2] = 1;
        rows[i][4] = 1;
    }
    let grid = Grid::from_bits(&rows).unwrap();
    for frontier in [FrontierKind::Heap, FrontierKind::Scan] {
        let finder = PathFinder::from_config(SearchConfig::default().with_frontier(frontier));
        assert_eq!(
            finder.find_path(&grid, c(0, 0), c(3, 3)).unwrap(),
            Outcome::NotFound
        );
        // And the other way round.
        assert_eq!(
            finder.find_path(&grid, c(3, 3), c(6, 6)).unwrap(),
            Outcome::NotFound
        );
    }
}

#[test]
fn disconnected_halves_not_found() {
    let mut rows = vec![[0u8; 6]; 5];
    for row in rows.iter_mut() {
        row[3] = 1;
    }
    let grid = Grid::from_bits(&rows).unwrap();
    let outcome = PathFinder::default()
        .find_path(&grid, c(0, 0), c(4, 5))
        .unwrap();
    assert!(!outcome.is_found());
}

#[test]
fn blocked_start_never_yields_silent_path() {
    let grid = sai_gon();
    let blocked = c(2, 1);
    assert!(matches!(
        PathFinder::default().find_path(&grid, blocked, c(8, 9)),
        Err(PathError::BlockedEndpoint { .. })
    ));
    assert!(matches!(
        PathFinder::default().find_path(&grid, blocked, blocked),
        Err(PathError::BlockedEndpoint { .. })
    ));
    let permissive = PathFinder::from_config(
        SearchConfig::default().with_blocked_endpoints(BlockedEndpoints::Search),
    );
    let path = permissive
        .find_path(&grid, blocked, c(8, 9))
        .unwrap()
        .into_path()
        .expect("blocked start can be left");
    assert_eq!(path.start(), blocked);
    assert!(path.cells()[1..].iter().all(|&p| grid.is_passable(p)));
}

#[test]
fn out_of_bounds_is_an_error_not_not_found() {
    let grid = hanoi();
    let err = PathFinder::default()
        .find_path(&grid, c(0, 0), c(10, 3))
        .unwrap_err();
    assert!(matches!(err, PathError::OutOfBounds { .. }));
    assert_eq!(err.to_string(), "goal (10, 3) is outside the 10x10 grid");
}

// ---------------------------------------------------------------------------
// Randomised cross-checks
// ---------------------------------------------------------------------------

#[test]
fn chebyshev_paths_are_optimal_on_random_grids() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let finder = PathFinder::new(Chebyshev, SearchConfig::default());
    for _ in 0..200 {
        let rows = rng.random_range(1..12usize);
        let cols = rng.random_range(1..12usize);
        let grid = random_grid(&mut rng, rows, cols, 0.3);
        let start = c(
            rng.random_range(0..rows as i32),
            rng.random_range(0..cols as i32),
        );
        let goal = c(
            rng.random_range(0..rows as i32),
            rng.random_range(0..cols as i32),
        );
        if !grid.is_passable(start) || !grid.is_passable(goal) {
            continue;
        }
        let expected = bfs_distance(&grid, start, goal);
        match finder.find_path(&grid, start, goal).unwrap() {
            Outcome::Found(path) => {
                assert_valid(&grid, &path, start, goal);
                assert_eq!(Some(path.steps()), expected);
                assert_eq!(path.cost(), path.steps() as f64);
            }
            Outcome::NotFound => assert_eq!(expected, None),
        }
    }
}

#[test]
fn heap_and_scan_frontiers_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let heuristics = [
        HeuristicKind::Chebyshev,
        HeuristicKind::Euclidean,
        HeuristicKind::Manhattan,
        HeuristicKind::Zero,
    ];
    for round in 0..120 {
        let grid = random_grid(&mut rng, 9, 13, 0.25);
        let start = c(rng.random_range(0..9), rng.random_range(0..13));
        let goal = c(rng.random_range(0..9), rng.random_range(0..13));
        let kind = heuristics[round % heuristics.len()];
        let base = SearchConfig::default()
            .with_heuristic(kind)
            .with_blocked_endpoints(BlockedEndpoints::Search);
        let heap = PathFinder::from_config(base.clone().with_frontier(FrontierKind::Heap));
        let scan = PathFinder::from_config(base.with_frontier(FrontierKind::Scan));
        let (a, sa) = heap.find_path_with_stats(&grid, start, goal).unwrap();
        let (b, sb) = scan.find_path_with_stats(&grid, start, goal).unwrap();
        assert_eq!(a, b, "{kind:?} {start} -> {goal}");
        assert_eq!(sa.expanded, sb.expanded);
        assert_eq!(sa.generated, sb.generated);
        assert_eq!(sa.relaxed, sb.relaxed);
    }
}

fn octile_matches_uniform_cost_search(step: StepCost, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let octile = PathFinder::from_config(
        SearchConfig::default()
            .with_heuristic(HeuristicKind::Octile)
            .with_step_cost(step),
    );
    let dijkstra = PathFinder::new(Zero, SearchConfig::default().with_step_cost(step));
    for _ in 0..300 {
        let grid = random_grid(&mut rng, 8, 8, 0.25);
        let start = c(rng.random_range(0..8), rng.random_range(0..8));
        let goal = c(rng.random_range(0..8), rng.random_range(0..8));
        if !grid.is_passable(start) || !grid.is_passable(goal) {
            continue;
        }
        let a = octile.find_path(&grid, start, goal).unwrap();
        let b = dijkstra.find_path(&grid, start, goal).unwrap();
        match (a.cost(), b.cost()) {
            (Some(x), Some(y)) => assert!((x - y).abs() < 1e-9, "{start} -> {goal}: {x} != {y}"),
            (None, None) => {}
            other => panic!("reachability differs: {other:?}"),
        }
    }
}

#[test]
fn octile_is_optimal_with_dear_diagonals() {
    octile_matches_uniform_cost_search(
        StepCost::Directional {
            orthogonal: 1.0,
            diagonal: std::f64::consts::SQRT_2,
        },
        3,
    );
}

#[test]
fn octile_is_optimal_with_cheap_diagonals() {
    octile_matches_uniform_cost_search(
        StepCost::Directional {
            orthogonal: 2.0,
            diagonal: 1.0,
        },
        11,
    );
}

#[test]
fn concurrent_searches_share_grid_and_finder() {
    let grid = sai_gon();
    let finder = PathFinder::new(Euclidean, SearchConfig::default());
    let goals = [c(8, 9), c(9, 0), c(0, 9), c(5, 5)];
    let results: Vec<Outcome> = std::thread::scope(|s| {
        let handles: Vec<_> = goals
            .iter()
            .map(|&goal| {
                let (grid, finder) = (&grid, &finder);
                s.spawn(move || finder.find_path(grid, c(0, 0), goal).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (goal, outcome) in goals.iter().zip(&results) {
        assert_eq!(*outcome, finder.find_path(&grid, c(0, 0), *goal).unwrap());
    }
}
