use wavefront_core::OccupancyGrid;

use crate::Planner;
use crate::error::PlanError;
use crate::field::{DistanceField, UNVISITED};
use crate::traits::Pather;

impl Planner {
    /// Compute the multi-source breadth-first distance field of `grid`.
    ///
    /// Every goal cell starts at distance 0 and each step to an 8-connected,
    /// non-obstacle neighbour costs 1. Cells no goal can reach, obstacles
    /// included, stay [`UNVISITED`].
    ///
    /// Fails with [`PlanError::BudgetExceeded`] before doing any work if the
    /// grid is larger than the configured budget, and with
    /// [`PlanError::NoGoal`] if goals are required and there are none.
    pub fn distance_field(&mut self, grid: &OccupancyGrid) -> Result<DistanceField, PlanError> {
        if let Some(limit) = self.config.max_cells {
            if grid.len() > limit {
                return Err(PlanError::BudgetExceeded {
                    cells: grid.len(),
                    limit,
                });
            }
        }
        let (field, goals) = self.propagate(grid);
        if goals == 0 && self.config.require_goal {
            return Err(PlanError::NoGoal);
        }
        Ok(field)
    }

    /// Run the propagation, returning the field and the number of goals.
    pub(crate) fn propagate(&mut self, grid: &OccupancyGrid) -> (DistanceField, usize) {
        let bounds = grid.bounds();
        let mut field = DistanceField::unvisited(bounds);
        self.queue.clear();

        // Seed goals in scan order.
        for (i, (_, label)) in grid.iter().enumerate() {
            if label.is_goal() {
                field.values[i] = 0;
                self.queue.push_back(i);
            }
        }
        let goals = self.queue.len();
        if goals == 0 {
            log::warn!("{bounds} grid has no goal cells, nothing is reachable");
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            let current_dist = field.values[ci];
            let cp = bounds.point(ci);

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if field.values[ni] != UNVISITED {
                    continue;
                }
                field.values[ni] = current_dist + 1;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "propagated {bounds} grid from {goals} goals: {} cells reached, max distance {:?}",
            field.reached_count(),
            field.max_distance()
        );
        (field, goals)
    }
}

/// Compute the distance field of `grid` with a default [`Planner`].
///
/// A grid without goals yields an all-[`UNVISITED`] field.
pub fn build_distance_field(grid: &OccupancyGrid) -> DistanceField {
    Planner::default().propagate(grid).0
}
