//! Command-line options of the `wavefront` binary.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wavefront_core::{OccupancyGrid, Point};
use wavefront_paths::{PlanError, PlannerConfig};

use crate::loader::{self, LoadError};
use crate::mapgen::RandomMap;

/// Plan a path down the wavefront distance field of an occupancy grid.
///
/// MAP is a JSON matrix (0 free, 1 obstacle, 2 goal) or a text map
/// ('.' free, '#' obstacle, 'G' goal).
#[derive(Parser, Debug)]
#[command(name = "wavefront", version, about, long_about = None)]
pub struct Args {
    /// Start row
    #[arg(allow_negative_numbers = true)]
    pub row: i32,

    /// Start column
    #[arg(allow_negative_numbers = true)]
    pub col: i32,

    /// Map file
    #[arg(required_unless_present = "random")]
    pub map: Option<PathBuf>,

    /// Generate a random map instead of reading one
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dims, conflicts_with = "map")]
    pub random: Option<(usize, usize)>,

    /// Seed of the random map
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Obstacle density of the random map
    #[arg(long, default_value_t = 0.25, value_parser = parse_density)]
    pub density: f64,

    /// Print without colours
    #[arg(long)]
    pub plain: bool,

    /// Print the field and trajectory as JSON
    #[arg(long)]
    pub json: bool,

    /// Refuse grids larger than N cells
    #[arg(long, value_name = "N")]
    pub max_cells: Option<usize>,

    /// Fail when the map has no goal
    #[arg(long)]
    pub require_goal: bool,
}

fn parse_dims(s: &str) -> Result<(usize, usize), String> {
    let bad = || format!("expected <ROWS>x<COLS>, got `{s}`");
    let (r, c) = s.split_once('x').ok_or_else(bad)?;
    match (r.parse(), c.parse()) {
        (Ok(r), Ok(c)) if r > 0 && c > 0 => Ok((r, c)),
        _ => Err(bad()),
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is not within [0, 1]"))
    }
}

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    File(PathBuf),
    Random { map: RandomMap, seed: u64 },
}

impl MapSource {
    /// Read or generate the grid.
    ///
    /// Random maps larger than the `config` budget are refused before any
    /// cell is allocated.
    pub fn load(&self, config: &PlannerConfig) -> Result<OccupancyGrid, LoadError> {
        match self {
            Self::File(path) => loader::load_map(path),
            Self::Random { map, seed } => {
                if let Some(limit) = config.max_cells {
                    let cells = map.cells().unwrap_or(usize::MAX);
                    if cells > limit {
                        return Err(PlanError::BudgetExceeded { cells, limit }.into());
                    }
                }
                let mut rng = StdRng::seed_from_u64(*seed);
                log::info!("generating {}x{} map with seed {seed}", map.rows, map.cols);
                Ok(map.generate(&mut rng)?)
            }
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub source: MapSource,
    pub start: Point,
    pub plain: bool,
    pub json: bool,
    pub config: PlannerConfig,
}

impl TryFrom<Args> for Options {
    type Error = clap::Error;

    fn try_from(args: Args) -> Result<Self, clap::Error> {
        let source = match (args.random, args.map) {
            (Some((rows, cols)), _) => MapSource::Random {
                map: RandomMap {
                    rows,
                    cols,
                    wall_density: args.density,
                },
                seed: args.seed,
            },
            (None, Some(path)) => MapSource::File(path),
            (None, None) => {
                return Err(Args::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "either MAP or --random is required",
                ));
            }
        };
        Ok(Self {
            source,
            start: Point::rc(args.row, args.col),
            plain: args.plain,
            json: args.json,
            config: PlannerConfig {
                max_cells: args.max_cells,
                require_goal: args.require_goal,
            },
        })
    }
}
