use wavefront_core::{OccupancyGrid, Point};

use crate::field::DistanceField;
use crate::neighbors::push_neighbors;

/// Neighbour enumeration used by propagation and extraction.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// In-bounds cells that are not obstacles.
impl Pather for OccupancyGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_neighbors(p, buf, |n| self.is_passable(n));
    }
}

/// In-bounds cells that hold a distance.
impl Pather for DistanceField {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_neighbors(p, buf, |n| self.is_reached(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_skips_obstacles_and_edges() {
        let g = OccupancyGrid::parse("..#\n.#.\nG..").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::rc(0, 1), &mut buf);
        // up, right(#), down(#) and the up-* diagonals are excluded.
        assert_eq!(buf, vec![Point::rc(0, 0), Point::rc(1, 2), Point::rc(1, 0)]);
    }

    #[test]
    fn field_skips_unvisited() {
        let f = DistanceField::from_rows(&[[1, -1], [-1, 0]]).unwrap();
        let mut buf = Vec::new();
        f.neighbors(Point::rc(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::rc(1, 1)]);
    }
}
