use maze_core::{Maze, Point, Range};

/// Grid interface required by the depth-first search.
///
/// The search only ever asks whether a point lies in the grid and, for
/// points that do, whether it is a wall.
pub trait Walkable {
    /// The rectangle of addressable cells.
    fn bounds(&self) -> Range;

    /// Whether the in-bounds cell `p` is impassable.
    fn is_wall(&self, p: Point) -> bool;

    /// Whether `p` lies inside [`bounds`](Self::bounds).
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}

impl Walkable for Maze {
    #[inline]
    fn bounds(&self) -> Range {
        Maze::bounds(self)
    }

    #[inline]
    fn is_wall(&self, p: Point) -> bool {
        Maze::is_wall(self, p)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        Maze::in_bounds(self, p)
    }
}
