use wavefront_core::Point;

/// The eight neighbour offsets, in the order candidates are tried.
///
/// As `(d_row, d_col)`: up, right, down, left, then up-right, down-right,
/// down-left, up-left. Extraction ties go to the earliest entry.
pub const OFFSETS: [Point; 8] = [
    Point::rc(-1, 0),
    Point::rc(0, 1),
    Point::rc(1, 0),
    Point::rc(0, -1),
    Point::rc(-1, 1),
    Point::rc(1, 1),
    Point::rc(1, -1),
    Point::rc(-1, -1),
];

/// Append the 8-connected neighbours of `p` for which `keep` returns `true`,
/// in [`OFFSETS`] order.
#[inline]
pub fn push_neighbors(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for d in OFFSETS {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}

/// Whether `a` and `b` differ by exactly one of the [`OFFSETS`].
#[inline]
pub fn is_neighbor(a: Point, b: Point) -> bool {
    OFFSETS.contains(&(b - a))
}
