//! **maze-core** — the grid model for character mazes.
//!
//! This crate provides the leaf types used by the search crate: geometry
//! primitives and a read-only [`Maze`] answering bounds and wall queries.

pub mod geom;
pub mod maze;

pub use geom::{Point, Range};
pub use maze::{Maze, MazeError};
