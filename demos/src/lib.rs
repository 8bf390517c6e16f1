//! Map catalog and text report shared by the demo binaries.
//!
//! A catalog is a JSON document listing named grids, each with a default
//! start and goal, plus an optional `search` section that configures the
//! finder:
//!
//! ```json
//! {
//!   "maps": [
//!     { "id": 1, "name": "Tiny", "start": [0, 0], "goal": [1, 1],
//!       "grid": [[0, 0], [0, 0]] }
//!   ],
//!   "search": { "heuristic": "euclidean" }
//! }
//! ```
//!
//! Grid cells are `0` for passable and any other number for blocked.

use std::fmt;
use std::path::{Path as FsPath, PathBuf};

use gridstar_core::{Coord, Grid, GridError};
use gridstar_paths::{Outcome, PathError, PathFinder, SearchConfig, SearchStats};
use log::{debug, info};
use serde::Deserialize;

/// Catalog read when `GRIDSTAR_MAPS` is not set.
pub const DEFAULT_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/maps.json");

/// Environment variable overriding the catalog location.
pub const CATALOG_ENV: &str = "GRIDSTAR_MAPS";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map {name:?}: {source}")]
    Grid { name: String, source: GridError },
    #[error("no map with id {0}")]
    UnknownMap(u32),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Search(#[from] PathError),
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct RawMap {
    id: u32,
    name: String,
    start: (i32, i32),
    goal: (i32, i32),
    grid: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCatalog {
    maps: Vec<RawMap>,
    #[serde(default)]
    search: SearchConfig,
}

/// A named grid with its default query.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub id: u32,
    pub name: String,
    pub start: Coord,
    pub goal: Coord,
    pub grid: Grid,
}

/// Maps in file order, plus the search settings to run them with.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub maps: Vec<MapEntry>,
    pub search: SearchConfig,
}

impl Catalog {
    /// Parse a catalog document. Every grid is validated here.
    pub fn from_json(text: &str) -> Result<Self, DemoError> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let maps = raw
            .maps
            .into_iter()
            .map(|m| {
                let grid = Grid::from_bits(&m.grid).map_err(|source| DemoError::Grid {
                    name: m.name.clone(),
                    source,
                })?;
                Ok(MapEntry {
                    id: m.id,
                    name: m.name,
                    start: m.start.into(),
                    goal: m.goal.into(),
                    grid,
                })
            })
            .collect::<Result<Vec<_>, DemoError>>()?;
        debug!("catalog: {} maps, search {:?}", maps.len(), raw.search);
        Ok(Self {
            maps,
            search: raw.search,
        })
    }

    pub fn load(path: &FsPath) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loading maps from {}", path.display());
        Self::from_json(&text)
    }

    /// Load from `GRIDSTAR_MAPS`, falling back to the bundled catalog.
    pub fn load_default() -> Result<Self, DemoError> {
        let path = std::env::var_os(CATALOG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));
        Self::load(&path)
    }

    pub fn get(&self, id: u32) -> Result<&MapEntry, DemoError> {
        self.maps
            .iter()
            .find(|m| m.id == id)
            .ok_or(DemoError::UnknownMap(id))
    }

    pub fn finder(&self) -> PathFinder {
        PathFinder::from_config(self.search.clone())
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// One query against a catalog map, with its result.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub map: &'a MapEntry,
    pub start: Coord,
    pub goal: Coord,
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl<'a> Evaluation<'a> {
    pub fn run(
        finder: &PathFinder,
        map: &'a MapEntry,
        start: Coord,
        goal: Coord,
    ) -> Result<Self, DemoError> {
        let (outcome, stats) = finder.find_path_with_stats(&map.grid, start, goal)?;
        Ok(Self {
            map,
            start,
            goal,
            outcome,
            stats,
        })
    }

    /// The grid as text: `#` blocked, `.` open, `*` on the path, `S` and `G`
    /// at the endpoints.
    pub fn render(&self) -> String {
        let grid = &self.map.grid;
        let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
        for (c, marker) in grid.iter() {
            let ch = if c == self.start {
                'S'
            } else if c == self.goal {
                'G'
            } else if self
                .outcome
                .path()
                .is_some_and(|p| p.cells().contains(&c))
            {
                '*'
            } else if marker.is_passable() {
                '.'
            } else {
                '#'
            };
            out.push(ch);
            if c.col as usize + 1 == grid.cols() {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Evaluation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Map:   {}", self.map.name)?;
        match &self.outcome {
            Outcome::Found(path) => writeln!(f, "Cost:  {}", path.cost())?,
            Outcome::NotFound => writeln!(f, "Cost:  no path")?,
        }
        writeln!(f, "Start: {}", self.start)?;
        writeln!(f, "End:   {}", self.goal)?;
        if let Some(path) = self.outcome.path() {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            writeln!(f, "Path:  {}", cells.join(" -> "))?;
        }
        writeln!(
            f,
            "Nodes: {} expanded, {} generated",
            self.stats.expanded, self.stats.generated
        )
    }
}

/// Parse a coordinate component given on the command line.
pub fn parse_component(arg: &str) -> Result<i32, DemoError> {
    arg.parse()
        .map_err(|_| DemoError::Usage(format!("not a coordinate: {arg:?}")))
}
