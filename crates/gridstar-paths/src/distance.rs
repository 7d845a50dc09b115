use gridstar_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A* heuristic: Manhattan distance as a cost.
///
/// Admissible and consistent for 4-directional movement with unit steps.
#[inline]
pub fn heuristic(from: Point, to: Point) -> f64 {
    f64::from(manhattan(from, to))
}
