use maze_core::Point;

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Order in which the depth-first search tries neighbours: the two
/// horizontal moves (x - 1, x + 1), then the two vertical ones
/// (y - 1, y + 1).
///
/// The first route found under this order is the one returned, so changing
/// it changes the output on any maze with more than one route.
pub const DFS_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// Unit offset of the move (Y grows down).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
        }
    }

    /// The neighbour of `p` in this direction.
    #[inline]
    pub fn step(self, p: Point) -> Point {
        p + self.delta()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn direction_round_trip() {
        for d in DFS_ORDER {
            let json = serde_json::to_string(&d).unwrap();
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }
}
