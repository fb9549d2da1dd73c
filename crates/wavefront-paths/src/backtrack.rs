//! Hill-descent trajectory extraction.

use std::fmt;

use wavefront_core::Point;

use crate::Planner;
use crate::error::PlanError;
use crate::field::{DistanceField, UNVISITED};
use crate::traits::Pather;

/// An ordered sequence of cells from a start to a goal.
///
/// The first point is the start, the last one a goal, and each point is an
/// 8-connected neighbour of the previous one, strictly closer to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    /// The cells, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last cell: the goal for a completed trajectory.
    #[inline]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of cells, start and end included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a trajectory holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The cells as `(row, col)` pairs.
    pub fn to_row_col(&self) -> Vec<(i32, i32)> {
        self.points.iter().map(|p| p.row_col()).collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Trajectory> for Vec<Point> {
    fn from(t: Trajectory) -> Self {
        t.points
    }
}

/// A trajectory was built from no points at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTrajectory;

impl fmt::Display for EmptyTrajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trajectory has no start point")
    }
}

impl std::error::Error for EmptyTrajectory {}

impl TryFrom<Vec<Point>> for Trajectory {
    type Error = EmptyTrajectory;

    fn try_from(points: Vec<Point>) -> Result<Self, EmptyTrajectory> {
        if points.is_empty() {
            return Err(EmptyTrajectory);
        }
        Ok(Self { points })
    }
}

impl Planner {
    /// Extract the trajectory from `start` down the distance `field`.
    ///
    /// Each step moves to the neighbour with the smallest distance; among
    /// equal minima the first in [`OFFSETS`](crate::OFFSETS) order wins.
    /// The field is only read.
    pub fn trajectory(
        &mut self,
        field: &DistanceField,
        start: Point,
    ) -> Result<Trajectory, PlanError> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let res = descend(field, start, &mut nbuf);
        self.nbuf = nbuf;
        res
    }
}

/// Extract the trajectory from `start` without a [`Planner`].
///
/// Takes the field by shared reference only, so several threads can
/// extract from one field at once.
pub fn extract_trajectory(field: &DistanceField, start: Point) -> Result<Trajectory, PlanError> {
    descend(field, start, &mut Vec::with_capacity(8))
}

fn descend(
    field: &DistanceField,
    start: Point,
    nbuf: &mut Vec<Point>,
) -> Result<Trajectory, PlanError> {
    let Some(mut current_dist) = field.at(start).filter(|&v| v != UNVISITED) else {
        return Err(PlanError::UnreachableStart { start });
    };

    // Distances strictly decrease, so no cell repeats.
    let mut points = Vec::with_capacity((current_dist as usize + 1).min(field.bounds().len()));
    points.push(start);
    let mut current = start;

    while current_dist != 0 {
        nbuf.clear();
        field.neighbors(current, nbuf);

        // First strict minimum wins ties.
        let mut best: Option<(Point, i32)> = None;
        for &np in nbuf.iter() {
            let Some(d) = field.at(np) else {
                continue;
            };
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((np, d));
            }
        }

        match best {
            Some((np, d)) if d < current_dist => {
                log::trace!("{current} ({current_dist}) -> {np} ({d})");
                current = np;
                current_dist = d;
                points.push(np);
            }
            _ => {
                log::debug!("dead end at {current} with distance {current_dist}");
                return Err(PlanError::DeadEnd {
                    at: current,
                    partial: Trajectory { points },
                });
            }
        }
    }

    log::debug!(
        "extracted trajectory {start} -> {current} in {} steps",
        points.len() - 1
    );
    Ok(Trajectory { points })
}
