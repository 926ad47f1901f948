use maze_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Whether every consecutive pair in `path` is exactly one cardinal step
/// apart. Empty and single-cell paths are walks.
pub fn is_walk(path: &[Point]) -> bool {
    path.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
}
