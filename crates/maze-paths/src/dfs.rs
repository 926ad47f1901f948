//! Depth-first search with explicit backtracking.

use maze_core::{Maze, Point, Range};

use crate::direction::DFS_ORDER;
use crate::traits::Walkable;

/// A committed cell on the exploration stack and the index into
/// [`DFS_ORDER`] of the next neighbour to try.
#[derive(Clone, Copy, Debug)]
struct Frame {
    pos: Point,
    next_dir: usize,
}

/// Outcome of stepping onto a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    /// Out of bounds, a wall, or already visited. Nothing was changed.
    Rejected,
    /// The target. It was appended to the path.
    AtTarget,
    /// An open cell. It was marked, appended and pushed as a frame.
    Exploring,
}

/// Reusable depth-first path search over a grid rectangle.
///
/// `DfsRange` owns the visited flags and the frame stack so that repeated
/// searches on same-sized mazes do not reallocate. Every search starts from
/// a cleared visited set.
#[derive(Debug, Clone)]
pub struct DfsRange {
    rng: Range,
    width: usize,
    visited: Vec<bool>,
    stack: Vec<Frame>,
    explored: usize,
}

impl DfsRange {
    /// Create a new `DfsRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            visited: vec![false; rng.len()],
            stack: Vec::new(),
            explored: 0,
        }
    }

    /// Create a `DfsRange` sized for `maze`.
    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.bounds())
    }

    /// Replace the underlying range. The visited buffer only grows.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if self.visited.len() < rng.len() {
            self.visited.resize(rng.len(), false);
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells committed (marked visited) by the last search.
    #[inline]
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Find a path from `from` to `to`, trying neighbours in [`DFS_ORDER`].
    ///
    /// Returns the cells from `from` to `to` inclusive, or an empty vector
    /// if `to` cannot be reached. The path is the first one found, not
    /// necessarily the shortest. Invalid endpoints are not an error: an
    /// out-of-bounds or wall `from` simply yields an empty path.
    ///
    /// If the range differs from `grid.bounds()` it is adjusted first.
    pub fn dfs_path<W: Walkable>(&mut self, grid: &W, from: Point, to: Point) -> Vec<Point> {
        if self.rng != grid.bounds() {
            self.set_range(grid.bounds());
        }
        // Reset.
        for v in self.visited.iter_mut() {
            *v = false;
        }
        self.stack.clear();
        self.explored = 0;

        let mut path = Vec::new();

        let found = match self.visit(grid, from, to, &mut path) {
            Visit::Rejected => false,
            Visit::AtTarget => true,
            Visit::Exploring => 'search: loop {
                let Some(top) = self.stack.last_mut() else {
                    break 'search false;
                };

                if top.next_dir == DFS_ORDER.len() {
                    // Dead end: un-commit the cell but leave it visited.
                    let dead = top.pos;
                    self.stack.pop();
                    path.pop();
                    log::trace!("dfs: backtrack from {dead}");
                    continue;
                }

                let next = DFS_ORDER[top.next_dir].step(top.pos);
                top.next_dir += 1;

                if self.visit(grid, next, to, &mut path) == Visit::AtTarget {
                    break 'search true;
                }
            },
        };
        self.stack.clear();

        log::debug!(
            "dfs: {from} -> {to}: {} ({} cells on path, {} explored)",
            if found { "found" } else { "unreachable" },
            path.len(),
            self.explored
        );
        debug_assert!(found || path.is_empty());
        path
    }

    /// Step onto `p`, committing it if it is open.
    fn visit<W: Walkable>(
        &mut self,
        grid: &W,
        p: Point,
        to: Point,
        path: &mut Vec<Point>,
    ) -> Visit {
        if !grid.in_bounds(p) || grid.is_wall(p) {
            return Visit::Rejected;
        }
        let Some(i) = self.idx(p) else {
            return Visit::Rejected;
        };
        if self.visited[i] {
            return Visit::Rejected;
        }
        if p == to {
            // The target is not marked: reaching it ends the search.
            path.push(p);
            return Visit::AtTarget;
        }
        self.visited[i] = true;
        self.explored += 1;
        path.push(p);
        self.stack.push(Frame { pos: p, next_dir: 0 });
        Visit::Exploring
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}
