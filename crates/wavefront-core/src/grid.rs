//! An immutable occupancy grid of [`CellLabel`] values.
//!
//! Grids are built once, from a numeric matrix ([`OccupancyGrid::from_rows`])
//! or a text map ([`OccupancyGrid::parse`]), and never change afterwards.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellLabel {
    /// Traversable.
    #[default]
    Free,
    /// Never traversable.
    Obstacle,
    /// A propagation seed.
    Goal,
}

impl CellLabel {
    /// Numeric label used by matrix inputs.
    pub const fn value(self) -> i32 {
        match self {
            Self::Free => 0,
            Self::Obstacle => 1,
            Self::Goal => 2,
        }
    }

    /// Label for a numeric value, if it is one of 0, 1 or 2.
    pub const fn from_value(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Free),
            1 => Some(Self::Obstacle),
            2 => Some(Self::Goal),
            _ => None,
        }
    }

    /// Label for a text-map character: `.` free, `#` obstacle, `G` goal.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Obstacle),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Character used by text maps.
    pub const fn to_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Obstacle => '#',
            Self::Goal => 'G',
        }
    }

    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Self::Obstacle)
    }

    #[inline]
    pub const fn is_goal(self) -> bool {
        matches!(self, Self::Goal)
    }
}

impl From<CellLabel> for i32 {
    fn from(c: CellLabel) -> Self {
        c.value()
    }
}

/// A rectangular, read-only grid of cell labels stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct OccupancyGrid {
    cells: Vec<CellLabel>,
    bounds: Range,
}

impl OccupancyGrid {
    /// Build a grid from numeric rows (0 free, 1 obstacle, 2 goal).
    ///
    /// Rows must be non-empty and all the same length.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let bounds = bounds_for(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let label = CellLabel::from_value(value).ok_or(GridError::InvalidLabel {
                    value,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(label);
            }
        }
        Ok(Self { cells, bounds })
    }

    /// Parse a text map, one line per row.
    ///
    /// Leading and trailing blank lines are ignored, as is trailing
    /// whitespace on each line. See [`CellLabel::from_char`] for the
    /// accepted characters.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim_matches('\n').lines().map(str::trim_end).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let bounds = bounds_for(lines.len(), cols)?;
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::Ragged {
                    row: y,
                    expected: cols,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let label = CellLabel::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(label);
            }
        }
        Ok(Self { cells, bounds })
    }

    /// Returns the bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the label at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellLabel> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| !c.is_obstacle())
    }

    /// Goal cells in row-major scan order.
    pub fn goals(&self) -> Vec<Point> {
        self.iter()
            .filter(|(_, c)| c.is_goal())
            .map(|(p, _)| p)
            .collect()
    }

    /// Count how many cells carry the given label.
    pub fn count(&self, label: CellLabel) -> usize {
        self.cells.iter().filter(|&&c| c == label).count()
    }

    /// Iterate over `(Point, CellLabel)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellLabel)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Numeric rows, the inverse of [`from_rows`](Self::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols())
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }
}

fn bounds_for(rows: usize, cols: usize) -> Result<Range, GridError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) if rows.checked_mul(cols).is_some() => Ok(Range::with_dims(r, c)),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}

impl TryFrom<Vec<Vec<i32>>> for OccupancyGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<OccupancyGrid> for Vec<Vec<i32>> {
    fn from(g: OccupancyGrid) -> Self {
        g.to_rows()
    }
}

impl std::str::FromStr for OccupancyGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::parse(s)
    }
}

/// Formats the grid as a text map, the inverse of [`OccupancyGrid::parse`].
impl std::fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (p, label)) in self.iter().enumerate() {
            if i > 0 && p.col() == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", label.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
....
.##.
...G";

    #[test]
    fn from_rows_and_size() {
        let g = OccupancyGrid::from_rows(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 2]]).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.len(), 9);
        assert_eq!(g.at(Point::rc(1, 1)), Some(CellLabel::Obstacle));
        assert_eq!(g.at(Point::rc(2, 2)), Some(CellLabel::Goal));
        assert_eq!(g.at(Point::rc(0, 0)), Some(CellLabel::Free));
        assert_eq!(g.at(Point::rc(3, 0)), None);
    }

    #[test]
    fn rectangular_not_square() {
        let g = OccupancyGrid::from_rows(&[[0, 0, 0, 2], [1, 1, 0, 0]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.at(Point::rc(0, 3)), Some(CellLabel::Goal));
        assert_eq!(g.at(Point::rc(1, 0)), Some(CellLabel::Obstacle));
    }

    #[test]
    fn empty_input_rejected() {
        let rows: Vec<Vec<i32>> = Vec::new();
        assert_eq!(OccupancyGrid::from_rows(&rows), Err(GridError::Empty));
        assert_eq!(
            OccupancyGrid::from_rows(&[Vec::<i32>::new()]),
            Err(GridError::Empty)
        );
        assert_eq!(OccupancyGrid::parse("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = OccupancyGrid::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn invalid_label_rejected() {
        let err = OccupancyGrid::from_rows(&[vec![0, 3], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidLabel {
                value: 3,
                pos: Point::rc(0, 1)
            }
        );
        assert!(err.to_string().contains("invalid cell label 3"));
    }

    #[test]
    fn parse_text_map() {
        let g = OccupancyGrid::parse(ROOM).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count(CellLabel::Obstacle), 2);
        assert_eq!(g.goals(), vec![Point::rc(2, 3)]);
        let parsed: OccupancyGrid = ROOM.parse().unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn parse_invalid_char() {
        let err = OccupancyGrid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                pos: Point::rc(1, 1)
            }
        );
    }

    #[test]
    fn goals_in_scan_order() {
        let g = OccupancyGrid::parse("G..G\n....\n.G..").unwrap();
        assert_eq!(
            g.goals(),
            vec![Point::rc(0, 0), Point::rc(0, 3), Point::rc(2, 1)]
        );
    }

    #[test]
    fn passable() {
        let g = OccupancyGrid::parse(ROOM).unwrap();
        assert!(g.is_passable(Point::rc(0, 0)));
        assert!(g.is_passable(Point::rc(2, 3)));
        assert!(!g.is_passable(Point::rc(1, 1)));
        assert!(!g.is_passable(Point::rc(-1, 0)));
    }

    #[test]
    fn to_rows_inverts_from_rows() {
        let rows = vec![vec![0, 1, 2], vec![2, 1, 0]];
        let g = OccupancyGrid::from_rows(&rows).unwrap();
        assert_eq!(g.to_rows(), rows);
    }

    #[test]
    fn display_is_text_map() {
        let g = OccupancyGrid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
        let g = OccupancyGrid::from_rows(&[[2, 1], [0, 0], [1, 2]]).unwrap();
        assert_eq!(g.to_string(), "G#\n..\n#G");
        assert_eq!(g.to_string().parse::<OccupancyGrid>(), Ok(g));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_matrix() {
        let g = OccupancyGrid::parse("..\n#G").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,0],[1,2]]");
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn malformed_matrix_fails_to_deserialize() {
        let res: Result<OccupancyGrid, _> = serde_json::from_str("[[0,0],[1]]");
        assert!(res.is_err());
    }
}
