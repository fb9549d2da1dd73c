//! Random obstacle maps for trying the planner without a map file.

use rand::{Rng, RngExt};

use wavefront_core::{GridError, OccupancyGrid};

/// Parameters of a random map.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomMap {
    pub rows: usize,
    pub cols: usize,
    /// Chance in `[0, 1]` that a cell is an obstacle.
    pub wall_density: f64,
}

impl Default for RandomMap {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            wall_density: 0.25,
        }
    }
}

impl RandomMap {
    /// Number of cells, `None` if it overflows `usize`.
    pub fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Generate a map with obstacles scattered at random and a single goal in
    /// the bottom-right corner.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<OccupancyGrid, GridError> {
        let mut cells = vec![vec![0; self.cols]; self.rows];
        for row in cells.iter_mut() {
            for c in row.iter_mut() {
                let r: f64 = rng.random();
                if r < self.wall_density {
                    *c = 1;
                }
            }
        }
        if let Some(last) = cells.last_mut().and_then(|row| row.last_mut()) {
            *last = 2;
        }
        OccupancyGrid::from_rows(&cells)
    }
}
