//! Loading occupancy grids from files.
//!
//! Two formats are accepted and told apart by their first non-blank
//! character: a JSON matrix (`[[0, 1, ...], ...]` or `{"map": [[...]]}`)
//! and a text map (`.` free, `#` obstacle, `G` goal).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use wavefront_core::{GridError, OccupancyGrid};
use wavefront_paths::PlanError;

#[derive(Deserialize)]
#[serde(untagged)]
enum MapDocument {
    Matrix(Vec<Vec<i32>>),
    Keyed { map: Vec<Vec<i32>> },
}

/// Errors that can occur when loading a map.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    Grid(GridError),
    /// The map would exceed the planner's budget.
    Plan(PlanError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read map: {e}"),
            Self::Json(e) => write!(f, "invalid JSON map: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Plan(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Plan(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PlanError> for LoadError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}

/// Read and parse the map at `path`.
pub fn load_map(path: impl AsRef<Path>) -> Result<OccupancyGrid, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let grid = parse_map(&content)?;
    log::info!(
        "loaded {}x{} map from {} with {} goals",
        grid.rows(),
        grid.cols(),
        path.display(),
        grid.goals().len()
    );
    log::trace!("map:\n{grid}");
    Ok(grid)
}

/// Parse a map in either accepted format.
pub fn parse_map(content: &str) -> Result<OccupancyGrid, LoadError> {
    match content.trim_start().chars().next() {
        Some('[') | Some('{') => {
            let doc: MapDocument = serde_json::from_str(content)?;
            let rows = match doc {
                MapDocument::Matrix(rows) | MapDocument::Keyed { map: rows } => rows,
            };
            Ok(OccupancyGrid::from_rows(&rows)?)
        }
        _ => Ok(OccupancyGrid::parse(content)?),
    }
}
