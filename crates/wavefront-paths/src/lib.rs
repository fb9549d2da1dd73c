//! Wavefront planning on 2D occupancy grids.
//!
//! Planning runs in two one-way steps:
//!
//! - **Propagation** ([`Planner::distance_field`], [`build_distance_field`]):
//!   a multi-source breadth-first search from every goal cell labels each
//!   reachable cell with its 8-connected hop distance to the nearest goal.
//! - **Extraction** ([`Planner::trajectory`], [`extract_trajectory`]):
//!   greedy descent from a start cell along strictly decreasing distances
//!   until a goal is reached.
//!
//! [`Planner::plan`] runs both. [`Planner`] owns its scratch buffers so
//! that repeated queries reuse their allocations.
//!
//! ```
//! use wavefront_core::{OccupancyGrid, Point};
//! use wavefront_paths::Planner;
//!
//! let grid = OccupancyGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 2]]).unwrap();
//! let plan = Planner::default().plan(&grid, Point::rc(0, 0)).unwrap();
//! assert_eq!(plan.field.at(Point::rc(1, 1)), Some(-1));
//! assert_eq!(plan.trajectory.end(), Point::rc(2, 2));
//! ```

mod backtrack;
mod bfs;
mod config;
mod distance;
mod error;
mod field;
mod neighbors;
mod planner;
mod traits;

pub use backtrack::{EmptyTrajectory, Trajectory, extract_trajectory};
pub use bfs::build_distance_field;
pub use config::PlannerConfig;
pub use distance::chebyshev;
pub use error::PlanError;
pub use field::{DistanceField, UNVISITED};
pub use neighbors::{OFFSETS, is_neighbor, push_neighbors};
pub use planner::{Plan, Planner};
pub use traits::Pather;
