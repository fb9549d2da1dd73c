use wavefront_core::Point;

/// Chebyshev (L∞) distance between two points.
///
/// On an unobstructed 8-connected grid this is the hop count between them.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
