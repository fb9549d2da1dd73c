//! Planning errors.

use std::fmt;

use wavefront_core::{GridError, Point};

use crate::backtrack::Trajectory;

/// Why a plan could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The input did not describe a valid grid.
    MalformedGrid(GridError),
    /// The grid has no goal cell and the planner was configured to require one.
    NoGoal,
    /// The grid has more cells than [`PlannerConfig::max_cells`](crate::PlannerConfig::max_cells).
    BudgetExceeded { cells: usize, limit: usize },
    /// The start is out of bounds, an obstacle, or cut off from every goal.
    UnreachableStart { start: Point },
    /// No neighbour of `at` is closer to a goal although `at` is not one.
    ///
    /// Only an inconsistent field can cause this. `partial` holds the
    /// trajectory up to and including `at`.
    DeadEnd { at: Point, partial: Trajectory },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid(e) => write!(f, "malformed grid: {e}"),
            Self::NoGoal => write!(f, "grid has no goal cell"),
            Self::BudgetExceeded { cells, limit } => {
                write!(f, "grid has {cells} cells, limit is {limit}")
            }
            Self::UnreachableStart { start } => {
                write!(f, "start {start} cannot reach any goal")
            }
            Self::DeadEnd { at, partial } => write!(
                f,
                "no descending neighbour at {at} after {} steps",
                partial.steps()
            ),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedGrid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PlanError {
    fn from(e: GridError) -> Self {
        Self::MalformedGrid(e)
    }
}
