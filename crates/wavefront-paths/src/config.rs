/// Limits and policies for a [`Planner`](crate::Planner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlannerConfig {
    /// Refuse grids with more cells than this. `None` means no limit.
    pub max_cells: Option<usize>,
    /// Report [`PlanError::NoGoal`](crate::PlanError::NoGoal) instead of
    /// returning an all-unvisited field when the grid has no goal.
    pub require_goal: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_cells: None,
            require_goal: false,
        }
    }
}

impl PlannerConfig {
    /// Set [`max_cells`](Self::max_cells).
    pub fn with_max_cells(mut self, limit: usize) -> Self {
        self.max_cells = Some(limit);
        self
    }

    /// Set [`require_goal`](Self::require_goal).
    pub fn with_require_goal(mut self, require: bool) -> Self {
        self.require_goal = require;
        self
    }
}
