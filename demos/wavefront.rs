//! Plan a path across a map file or a random map and print it.
//!
//! Run: cargo run --bin wavefront -- 13 2 maze.json
//!
//! Log output goes to stderr, filtered by `WAVEFRONT_LOG` (default `warn`).

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;

use wavefront_core::OccupancyGrid;
use wavefront_demos::cli::{Args, Options};
use wavefront_paths::{DistanceField, PlanError, Planner, Trajectory};
use wavefront_render::{draw, format_trajectory, render_overlay};

#[derive(Serialize)]
struct Report<'a> {
    rows: usize,
    cols: usize,
    field: &'a DistanceField,
    trajectory: Option<Vec<(i32, i32)>>,
}

fn print_result(
    opts: &Options,
    grid: &OccupancyGrid,
    field: &DistanceField,
    path: Option<&Trajectory>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if opts.json {
        let report = Report {
            rows: grid.rows(),
            cols: grid.cols(),
            field,
            trajectory: path.map(Trajectory::to_row_col),
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else if opts.plain {
        write!(out, "{}", render_overlay(grid, field, path))?;
    } else {
        draw(&mut out, grid, field, path)?;
    }
    if let (Some(path), false) = (path, opts.json) {
        writeln!(out, "\ntrajectory =")?;
        write!(out, "{}", format_trajectory(path))?;
    }
    Ok(())
}

fn run(opts: Options) -> Result<(), Box<dyn std::error::Error>> {
    let grid = opts.source.load(&opts.config)?;
    let mut planner = Planner::new(opts.config);
    log::debug!("planner config: {:?}", planner.config());
    let field = planner.distance_field(&grid)?;

    match planner.trajectory(&field, opts.start) {
        Ok(path) => {
            log::info!("reached {} in {} steps", path.end(), path.steps());
            print_result(&opts, &grid, &field, Some(&path))
        }
        Err(PlanError::DeadEnd { at, partial }) => {
            print_result(&opts, &grid, &field, Some(&partial))?;
            Err(PlanError::DeadEnd { at, partial }.into())
        }
        Err(e) => {
            print_result(&opts, &grid, &field, None)?;
            Err(e.into())
        }
    }
}

fn main() {
    let opts = match Options::try_from(Args::parse()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };

    if let Err(e) = env_logger::Builder::from_env(
        env_logger::Env::new().filter_or("WAVEFRONT_LOG", "warn"),
    )
    .try_init()
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
