//! Collaborators around the planner: map loading, random maps and
//! command-line parsing for the `wavefront` binary.

pub mod cli;
pub mod loader;
pub mod mapgen;

pub use cli::{Args, MapSource, Options};
pub use loader::{LoadError, load_map, parse_map};
pub use mapgen::RandomMap;
