use wavefront_core::{CellLabel, OccupancyGrid, Point};
use wavefront_paths::{DistanceField, Trajectory, UNVISITED};

/// What a renderer shows for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Glyph {
    Start,
    Path,
    Obstacle,
    Goal,
    Unreachable,
    Distance(i32),
}

/// Per-cell classification of a (grid, field, trajectory) triple.
pub(crate) struct Overlay<'a> {
    grid: &'a OccupancyGrid,
    field: &'a DistanceField,
    on_path: Vec<bool>,
    start: Option<Point>,
}

impl<'a> Overlay<'a> {
    pub(crate) fn new(
        grid: &'a OccupancyGrid,
        field: &'a DistanceField,
        path: Option<&Trajectory>,
    ) -> Self {
        let bounds = grid.bounds();
        let mut on_path = vec![false; bounds.len()];
        for &p in path.into_iter().flatten() {
            if let Some(i) = bounds.index(p) {
                on_path[i] = true;
            }
        }
        Self {
            grid,
            field,
            on_path,
            start: path.map(Trajectory::start),
        }
    }

    pub(crate) fn glyph(&self, p: Point) -> Glyph {
        let bounds = self.grid.bounds();
        if self.start == Some(p) {
            return Glyph::Start;
        }
        if bounds.index(p).is_some_and(|i| self.on_path[i]) {
            return Glyph::Path;
        }
        match self.grid.at(p) {
            Some(CellLabel::Obstacle) | None => Glyph::Obstacle,
            Some(CellLabel::Goal) => Glyph::Goal,
            Some(CellLabel::Free) => match self.field.at(p) {
                Some(v) if v != UNVISITED => Glyph::Distance(v),
                _ => Glyph::Unreachable,
            },
        }
    }

    /// Rows of glyphs in row-major order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = Vec<Glyph>> + '_ {
        let cols = self.grid.cols() as i32;
        (0..self.grid.rows() as i32)
            .map(move |r| (0..cols).map(|c| self.glyph(Point::rc(r, c))).collect::<Vec<_>>())
    }

    pub(crate) fn max_distance(&self) -> i32 {
        self.field.max_distance().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_paths::Planner;

    #[test]
    fn classifies_every_kind() {
        let grid = OccupancyGrid::parse("..#.\n...G\n##..\n.#..").unwrap();
        let plan = Planner::default().plan(&grid, Point::rc(0, 0)).unwrap();
        let o = Overlay::new(&grid, &plan.field, Some(&plan.trajectory));
        assert_eq!(o.glyph(Point::rc(0, 0)), Glyph::Start);
        assert_eq!(o.glyph(Point::rc(0, 2)), Glyph::Obstacle);
        assert_eq!(o.glyph(Point::rc(3, 0)), Glyph::Unreachable);
        assert_eq!(o.glyph(plan.trajectory.end()), Glyph::Path);
        assert_eq!(o.glyph(Point::rc(3, 3)), Glyph::Distance(2));
    }

    #[test]
    fn without_path() {
        let grid = OccupancyGrid::parse("G.").unwrap();
        let field = wavefront_paths::build_distance_field(&grid);
        let o = Overlay::new(&grid, &field, None);
        let rows: Vec<_> = o.rows().collect();
        assert_eq!(rows, vec![vec![Glyph::Goal, Glyph::Distance(1)]]);
        assert_eq!(o.max_distance(), 1);
    }
}
