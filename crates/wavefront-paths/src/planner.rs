use std::collections::VecDeque;

use wavefront_core::{OccupancyGrid, Point};

use crate::backtrack::Trajectory;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::field::DistanceField;

/// A completed plan: the field it was extracted from and the trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub field: DistanceField,
    pub trajectory: Trajectory,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Builds distance fields and extracts trajectories.
///
/// `Planner` owns its configuration and the scratch buffers used by
/// propagation and extraction, so repeated queries reuse their allocations.
/// It holds no grid state between calls.
#[derive(Debug, Default)]
pub struct Planner {
    pub(crate) config: PlannerConfig,
    pub(crate) queue: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Planner {
    /// Create a new `Planner` with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build the distance field of `grid`, then extract a trajectory from
    /// `start` to the nearest goal.
    pub fn plan(&mut self, grid: &OccupancyGrid, start: Point) -> Result<Plan, PlanError> {
        let field = self.distance_field(grid)?;
        let trajectory = self.trajectory(&field, start)?;
        Ok(Plan { field, trajectory })
    }

    /// [`plan`](Self::plan) from a numeric matrix (0 free, 1 obstacle, 2 goal).
    pub fn plan_rows<R: AsRef<[i32]>>(
        &mut self,
        rows: &[R],
        start: Point,
    ) -> Result<Plan, PlanError> {
        let grid = OccupancyGrid::from_rows(rows)?;
        self.plan(&grid, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::UNVISITED;
    use wavefront_core::GridError;

    #[test]
    fn plan_around_obstacle() {
        let grid = OccupancyGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 2]]).unwrap();
        let mut planner = Planner::default();
        let plan = planner.plan(&grid, Point::rc(0, 0)).unwrap();
        assert_eq!(plan.field.at(Point::rc(1, 1)), Some(UNVISITED));
        assert_eq!(plan.trajectory.start(), Point::rc(0, 0));
        assert_eq!(plan.trajectory.end(), Point::rc(2, 2));
        assert_eq!(plan.trajectory.len(), 4);
    }

    #[test]
    fn plan_rows_reports_malformed_grid() {
        let mut planner = Planner::default();
        let err = planner
            .plan_rows(&[vec![0, 2], vec![0, 5]], Point::rc(0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::MalformedGrid(GridError::InvalidLabel {
                value: 5,
                pos: Point::rc(1, 1)
            })
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn budget_exceeded_before_propagation() {
        let grid = OccupancyGrid::parse("....\n...G").unwrap();
        let mut planner = Planner::new(PlannerConfig::default().with_max_cells(7));
        assert_eq!(
            planner.distance_field(&grid),
            Err(PlanError::BudgetExceeded { cells: 8, limit: 7 })
        );
        let mut planner = Planner::new(PlannerConfig::default().with_max_cells(8));
        assert!(planner.distance_field(&grid).is_ok());
    }

    #[test]
    fn config_is_kept() {
        let cfg = PlannerConfig::default()
            .with_max_cells(12)
            .with_require_goal(true);
        assert_eq!(Planner::new(cfg).config(), &cfg);
        assert_eq!(Planner::default().config(), &PlannerConfig::default());
    }

    #[test]
    fn missing_goal_is_not_fatal_by_default() {
        let grid = OccupancyGrid::parse("...\n.#.").unwrap();
        let mut planner = Planner::default();
        let field = planner.distance_field(&grid).unwrap();
        assert_eq!(field.reached_count(), 0);
        assert_eq!(
            planner.trajectory(&field, Point::rc(0, 0)),
            Err(PlanError::UnreachableStart {
                start: Point::rc(0, 0)
            })
        );
    }

    #[test]
    fn missing_goal_when_required() {
        let grid = OccupancyGrid::parse("...\n.#.").unwrap();
        let mut planner = Planner::new(PlannerConfig::default().with_require_goal(true));
        assert_eq!(planner.distance_field(&grid), Err(PlanError::NoGoal));
        assert_eq!(
            planner.plan(&grid, Point::rc(0, 0)).unwrap_err(),
            PlanError::NoGoal
        );
    }

    #[test]
    fn planner_reused_across_grids() {
        let mut planner = Planner::default();
        let big = OccupancyGrid::parse("G.....\n......\n......\n.....G").unwrap();
        let small = OccupancyGrid::parse("G.\n..").unwrap();
        let a = planner.plan(&big, Point::rc(3, 0)).unwrap();
        let b = planner.plan(&small, Point::rc(1, 1)).unwrap();
        let c = planner.plan(&big, Point::rc(3, 0)).unwrap();
        assert_eq!(a, c);
        assert_eq!(b.trajectory.to_row_col(), vec![(1, 1), (0, 0)]);
        assert_eq!(b.field.to_rows(), vec![vec![0, 1], vec![1, 1]]);
    }

    #[test]
    fn errors_display() {
        assert_eq!(PlanError::NoGoal.to_string(), "grid has no goal cell");
        let e = PlanError::UnreachableStart {
            start: Point::rc(1, 2),
        };
        assert_eq!(e.to_string(), "start (1, 2) cannot reach any goal");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn plan_round_trip() {
        let grid = OccupancyGrid::parse("#..\n..G").unwrap();
        let plan = Planner::default().plan(&grid, Point::rc(0, 1)).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn config_defaults_missing_fields() {
        let cfg: PlannerConfig = serde_json::from_str(r#"{"max_cells": 100}"#).unwrap();
        assert_eq!(cfg.max_cells, Some(100));
        assert!(!cfg.require_goal);
    }
}
