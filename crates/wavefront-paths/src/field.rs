use wavefront_core::{GridError, Point, Range};

/// Sentinel value for cells no goal reached: obstacles and isolated cells.
pub const UNVISITED: i32 = -1;

/// Hop distance from the nearest goal for every cell of a grid.
///
/// Goal cells hold `0`, reached cells hold their propagation depth and every
/// other cell holds [`UNVISITED`]. A field is produced by
/// [`Planner::distance_field`](crate::Planner::distance_field) or
/// [`build_distance_field`](crate::build_distance_field) and is only read
/// afterwards, so one field can be shared by any number of extractions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct DistanceField {
    pub(crate) values: Vec<i32>,
    pub(crate) bounds: Range,
}

impl DistanceField {
    /// A field with every cell [`UNVISITED`].
    pub(crate) fn unvisited(bounds: Range) -> Self {
        Self {
            values: vec![UNVISITED; bounds.len()],
            bounds,
        }
    }

    /// Build a field from an externally produced matrix.
    ///
    /// Nothing is checked beyond shape and `value >= UNVISITED`; a field
    /// built this way need not be consistent, and extraction reports a
    /// dead end if it is not.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let (Ok(h), Ok(w)) = (i32::try_from(rows.len()), i32::try_from(cols)) else {
            return Err(GridError::TooLarge {
                rows: rows.len(),
                cols,
            });
        };
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|&v| v < UNVISITED) {
                return Err(GridError::InvalidLabel {
                    value: row[x],
                    pos: Point::new(x as i32, y as i32),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            values,
            bounds: Range::with_dims(h, w),
        })
    }

    /// The grid rectangle covered by the field.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Value at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.bounds.index(p).map(|i| self.values[i])
    }

    /// Whether `p` is in bounds and holds a distance.
    #[inline]
    pub fn is_reached(&self, p: Point) -> bool {
        self.at(p).is_some_and(|v| v != UNVISITED)
    }

    /// Number of cells holding a distance, goals included.
    pub fn reached_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != UNVISITED).count()
    }

    /// Largest distance in the field, or `None` if nothing was reached.
    pub fn max_distance(&self) -> Option<i32> {
        self.values.iter().copied().filter(|&v| v != UNVISITED).max()
    }

    /// Row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Values as a matrix of the grid's shape.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.values.chunks(self.cols()).map(<[i32]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for DistanceField {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<DistanceField> for Vec<Vec<i32>> {
    fn from(f: DistanceField) -> Self {
        f.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvisited_field() {
        let f = DistanceField::unvisited(Range::with_dims(2, 3));
        assert_eq!(f.rows(), 2);
        assert_eq!(f.cols(), 3);
        assert_eq!(f.reached_count(), 0);
        assert_eq!(f.max_distance(), None);
        assert_eq!(f.to_rows(), vec![vec![-1; 3]; 2]);
    }

    #[test]
    fn queries() {
        let f = DistanceField::from_rows(&[[2, 1, 0], [-1, 1, 0]]).unwrap();
        assert_eq!(f.at(Point::rc(0, 0)), Some(2));
        assert_eq!(f.at(Point::rc(1, 0)), Some(UNVISITED));
        assert_eq!(f.at(Point::rc(2, 0)), None);
        assert!(f.is_reached(Point::rc(1, 2)));
        assert!(!f.is_reached(Point::rc(1, 0)));
        assert!(!f.is_reached(Point::rc(0, -1)));
        assert_eq!(f.reached_count(), 5);
        assert_eq!(f.max_distance(), Some(2));
        assert_eq!(f.as_slice(), &[2, 1, 0, -1, 1, 0]);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(
            DistanceField::from_rows(&[vec![0, 1], vec![1]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            DistanceField::from_rows(&[[0, -2]]),
            Err(GridError::InvalidLabel {
                value: -2,
                pos: Point::rc(0, 1)
            })
        );
        let none: [[i32; 0]; 1] = [[]];
        assert_eq!(DistanceField::from_rows(&none), Err(GridError::Empty));
    }
}
