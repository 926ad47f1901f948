//! One-shot entry points over text mazes.

use std::fmt;

use maze_core::{Maze, MazeError, Point};

use crate::dfs::DfsRange;

/// Find a path through the maze given by `rows`, where `wall` marks
/// impassable cells.
///
/// Returns the cells from `start` to `end` inclusive, or an empty vector
/// when there is no route. Bad coordinates and ragged rows are not reported;
/// they just make the search fail. See [`try_solve`] for diagnostics.
///
/// ```
/// use maze_core::Point;
/// use maze_paths::solve;
///
/// let path = solve(&["...", ".#.", "..."], '#', Point::new(0, 0), Point::new(2, 2));
/// assert_eq!(path.len(), 5);
/// ```
pub fn solve<S: AsRef<str>>(rows: &[S], wall: char, start: Point, end: Point) -> Vec<Point> {
    solve_maze(&Maze::new(rows, wall), start, end)
}

/// [`solve`] on an already built [`Maze`].
pub fn solve_maze(maze: &Maze, start: Point, end: Point) -> Vec<Point> {
    DfsRange::for_maze(maze).dfs_path(maze, start, end)
}

/// Like [`solve_maze`], but tells malformed input apart from an
/// unreachable target.
///
/// A successful result is always the same path [`solve_maze`] returns.
pub fn try_solve(maze: &Maze, start: Point, end: Point) -> Result<Vec<Point>, SolveError> {
    let checked = check(maze, start, end);
    if let Err(err) = &checked {
        log::debug!("try_solve: rejected input: {err}");
    }
    checked?;

    let path = solve_maze(maze, start, end);
    if path.is_empty() {
        return Err(SolveError::Unreachable);
    }
    Ok(path)
}

fn check(maze: &Maze, start: Point, end: Point) -> Result<(), SolveError> {
    maze.validate()?;
    for p in [start, end] {
        if !maze.in_bounds(p) {
            return Err(SolveError::OutOfBounds(p));
        }
    }
    for p in [start, end] {
        if maze.is_wall(p) {
            return Err(SolveError::Blocked(p));
        }
    }
    Ok(())
}

/// Why [`try_solve`] found no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The maze itself is empty or not rectangular.
    InvalidMaze(MazeError),
    /// An endpoint lies outside the maze.
    OutOfBounds(Point),
    /// An endpoint is a wall.
    Blocked(Point),
    /// Both endpoints are open but not connected.
    Unreachable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaze(err) => write!(f, "invalid maze: {err}"),
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the maze"),
            Self::Blocked(p) => write!(f, "point {p} is a wall"),
            Self::Unreachable => write!(f, "no path between the endpoints"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMaze(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MazeError> for SolveError {
    fn from(err: MazeError) -> Self {
        Self::InvalidMaze(err)
    }
}
