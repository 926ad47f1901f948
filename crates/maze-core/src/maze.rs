//! The [`Maze`] type — a read-only character grid with a wall marker.
//!
//! A maze is built from text rows. Every character equal to the wall marker
//! is impassable; any other character (including start/end glyphs) is open
//! floor. The width of the maze is the length of its first row.

use std::fmt;

use crate::geom::{Point, Range};

/// A rectangular character grid in which one character denotes a wall.
///
/// [`Maze::new`] accepts any rows without checking them; ragged input is
/// tolerated and cells past the end of a short row simply read as absent.
/// Use [`Maze::parse`] or [`Maze::validate`] when malformed input must be
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    rows: Vec<Vec<char>>,
    wall: char,
}

impl Maze {
    /// Create a maze from text rows without validation.
    pub fn new<S: AsRef<str>>(rows: &[S], wall: char) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
            wall,
        }
    }

    /// Parse a newline-separated maze, rejecting empty or ragged input.
    ///
    /// ```
    /// use maze_core::{Maze, Point};
    ///
    /// let maze = Maze::parse("#.#\n...", '#').unwrap();
    /// assert_eq!(maze.width(), 3);
    /// assert!(maze.is_wall(Point::new(0, 0)));
    /// ```
    pub fn parse(text: &str, wall: char) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text.lines().collect();
        let maze = Self::new(&rows, wall);
        maze.validate()?;
        Ok(maze)
    }

    /// Check that the maze is non-empty and rectangular.
    pub fn validate(&self) -> Result<(), MazeError> {
        let expected = self.rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(MazeError::Empty);
        }
        for (row, cells) in self.rows.iter().enumerate().skip(1) {
            if cells.len() != expected {
                return Err(MazeError::InconsistentSize {
                    row,
                    width: cells.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// The wall marker.
    #[inline]
    pub fn wall(&self) -> char {
        self.wall
    }

    /// Width in cells, taken from the first row.
    #[inline]
    pub fn width(&self) -> i32 {
        self.rows.first().map_or(0, |r| r.len() as i32)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// The rectangle `(0, 0)-(width, height)` covered by the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width(), self.height())
    }

    /// Whether `p` lies inside the maze rectangle.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The character at `p`, or `None` outside the maze (or past the end of
    /// a short row).
    pub fn at(&self, p: Point) -> Option<char> {
        if !self.in_bounds(p) {
            return None;
        }
        self.rows[p.y as usize].get(p.x as usize).copied()
    }

    /// Whether the cell at `p` holds the wall marker.
    ///
    /// Only meaningful for in-bounds points; anything else reports `false`.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p) == Some(self.wall)
    }

    /// Iterate over the rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Render the maze with `glyph` drawn on each cell of `path`.
    pub fn overlay(&self, path: &[Point], glyph: char) -> String {
        let mut rows = self.rows.clone();
        for &p in path {
            if !self.in_bounds(p) {
                continue;
            }
            if let Some(c) = rows[p.y as usize].get_mut(p.x as usize) {
                *c = glyph;
            }
        }
        join_rows(&rows)
    }
}

fn join_rows(rows: &[Vec<char>]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.iter());
    }
    out
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_rows(&self.rows))
    }
}

/// Errors reported when checking maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row whose width differs from the first row.
    InconsistentSize {
        row: usize,
        width: usize,
        expected: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no cells"),
            Self::InconsistentSize {
                row,
                width,
                expected,
            } => write!(
                f,
                "maze: inconsistent size: row {row} has width {width}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
####
#S.#
#.E#
####";

    #[test]
    fn parse_and_size() {
        let m = Maze::parse(ROOM, '#').unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 4);
        assert_eq!(m.bounds(), Range::new(0, 0, 4, 4));
        assert_eq!(m.wall(), '#');
    }

    #[test]
    fn walls_and_glyphs() {
        let m = Maze::parse(ROOM, '#').unwrap();
        assert!(m.is_wall(Point::new(0, 0)));
        assert!(!m.is_wall(Point::new(1, 1)));
        assert_eq!(m.at(Point::new(1, 1)), Some('S'));
        assert_eq!(m.at(Point::new(2, 2)), Some('E'));
    }

    #[test]
    fn out_of_bounds_queries() {
        let m = Maze::new(&["..", ".."], '#');
        assert!(!m.in_bounds(Point::new(-1, 0)));
        assert!(!m.in_bounds(Point::new(0, 2)));
        assert!(!m.in_bounds(Point::new(2, 0)));
        assert_eq!(m.at(Point::new(5, 5)), None);
        assert!(!m.is_wall(Point::new(-3, 1)));
    }

    #[test]
    fn width_comes_from_first_row() {
        let m = Maze::new(&["...", "."], '#');
        assert_eq!(m.width(), 3);
        assert!(m.in_bounds(Point::new(2, 1)));
        // Past the end of the short row: in bounds but absent.
        assert_eq!(m.at(Point::new(2, 1)), None);
        assert!(!m.is_wall(Point::new(2, 1)));
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Maze::parse("AB\nCDE", '#').unwrap_err();
        assert_eq!(
            err,
            MazeError::InconsistentSize {
                row: 1,
                width: 3,
                expected: 2
            }
        );
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_error() {
        assert_eq!(Maze::parse("", '#'), Err(MazeError::Empty));
        assert_eq!(Maze::new::<&str>(&[], '#').validate(), Err(MazeError::Empty));
        assert_eq!(Maze::new(&["", ""], '#').validate(), Err(MazeError::Empty));
    }

    #[test]
    fn unicode_cells_count_as_one() {
        let m = Maze::parse("█·█\n···", '█').unwrap();
        assert_eq!(m.width(), 3);
        assert!(m.is_wall(Point::new(2, 0)));
        assert!(!m.is_wall(Point::new(1, 0)));
    }

    #[test]
    fn display_and_overlay() {
        let m = Maze::parse(ROOM, '#').unwrap();
        assert_eq!(m.to_string(), ROOM);
        let drawn = m.overlay(&[Point::new(1, 1), Point::new(2, 1), Point::new(9, 9)], '*');
        assert_eq!(drawn, "####\n#**#\n#.E#\n####");
    }

    #[test]
    fn rows_iter() {
        let m = Maze::new(&["ab", "cd"], '#');
        let rows: Vec<String> = m.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["ab".to_string(), "cd".to_string()]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let m = Maze::parse("#.\n.#", '#').unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
