//! Depth-first path search for character mazes.
//!
//! The search explores from a start cell towards a target using the four
//! cardinal moves in a fixed order ([`DFS_ORDER`]: left, right, up, down),
//! committing cells tentatively and backtracking on dead ends. The first
//! route found is returned; it is not necessarily the shortest.
//!
//! - [`solve`] / [`solve_maze`]: one-shot search, empty result when there is
//!   no route.
//! - [`try_solve`]: the same search, with [`SolveError`] diagnostics for
//!   malformed input.
//! - [`DfsRange::dfs_path`]: reusable search over any [`Walkable`] grid.
//!
//! Exploration uses an explicit frame stack, so the depth of a search is
//! bounded by heap memory rather than by the thread's call stack.

mod dfs;
mod direction;
mod distance;
mod solve;
mod traits;

pub use dfs::DfsRange;
pub use direction::{DFS_ORDER, Direction};
pub use distance::{is_walk, manhattan};
pub use solve::{SolveError, solve, solve_maze, try_solve};
pub use traits::Walkable;
