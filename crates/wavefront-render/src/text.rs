//! Plain-text renderings.

use std::fmt::Write;

use wavefront_core::OccupancyGrid;
use wavefront_paths::{DistanceField, Trajectory};

use crate::overlay::{Glyph, Overlay};

/// Render the field as a grid of three-column cells with the path marked.
///
/// Trajectory cells show ` * `, obstacles ` X `, goals ` G `, free cells no
/// goal reaches ` . `, and every other cell its distance.
pub fn render_overlay(
    grid: &OccupancyGrid,
    field: &DistanceField,
    path: Option<&Trajectory>,
) -> String {
    let overlay = Overlay::new(grid, field, path);
    let mut out = String::with_capacity(grid.len() * 3 + grid.rows());
    for row in overlay.rows() {
        for g in row {
            match g {
                Glyph::Start | Glyph::Path => out.push_str(" * "),
                Glyph::Obstacle => out.push_str(" X "),
                Glyph::Goal => out.push_str(" G "),
                Glyph::Unreachable => out.push_str(" . "),
                Glyph::Distance(v) => {
                    let _ = write!(out, "{v:2} ");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// The raw distance matrix, one row per line, `-1` for unvisited cells.
pub fn format_value_map(field: &DistanceField) -> String {
    let width = field
        .max_distance()
        .map_or(2, |m| m.to_string().len().max(2));
    let mut out = String::new();
    for row in field.to_rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// One `row  col` line per trajectory cell.
pub fn format_trajectory(path: &Trajectory) -> String {
    let mut out = String::new();
    for p in path {
        let _ = writeln!(out, "{:>4}  {}", p.row(), p.col());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_core::Point;
    use wavefront_paths::{Planner, build_distance_field};

    #[test]
    fn overlay_marks_path_and_obstacle() {
        let grid = OccupancyGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 2]]).unwrap();
        let plan = Planner::default().plan(&grid, Point::rc(0, 0)).unwrap();
        let s = render_overlay(&grid, &plan.field, Some(&plan.trajectory));
        assert_eq!(
            s,
            " *  *  2 \n \
             2  X  * \n \
             2  1  * \n"
        );
    }

    #[test]
    fn overlay_without_path() {
        let grid = OccupancyGrid::parse("G#.\n.#.").unwrap();
        let field = build_distance_field(&grid);
        assert_eq!(
            render_overlay(&grid, &field, None),
            " G  X  . \n 1  X  . \n"
        );
    }

    #[test]
    fn value_map_lines() {
        let field = DistanceField::from_rows(&[[0, 1, -1], [12, 3, 0]]).unwrap();
        assert_eq!(format_value_map(&field), " 0  1 -1\n12  3  0\n");
    }

    #[test]
    fn trajectory_lines() {
        let grid = OccupancyGrid::parse("...\n...\n..G").unwrap();
        let plan = Planner::default().plan(&grid, Point::rc(0, 0)).unwrap();
        assert_eq!(
            format_trajectory(&plan.trajectory),
            "   0  0\n   1  1\n   2  2\n"
        );
    }
}
