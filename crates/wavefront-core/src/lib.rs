//! **wavefront-core**: occupancy grids and geometry primitives.
//!
//! This crate provides the types shared across the *wavefront* workspace:
//! [`Point`] and [`Range`] geometry, the [`CellLabel`] of each grid cell,
//! and the immutable [`OccupancyGrid`] the planner reads.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{CellLabel, OccupancyGrid};
