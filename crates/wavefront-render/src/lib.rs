//! Text and terminal renderers for wavefront plans.
//!
//! [`render_overlay`] prints the distance field with the trajectory marked,
//! [`format_value_map`] and [`format_trajectory`] dump the raw data, and
//! [`draw`] writes a coloured version through crossterm.

mod overlay;
pub mod term;
pub mod text;

pub use term::draw;
pub use text::{format_trajectory, format_value_map, render_overlay};
