//! Board positions and swap directions.
//!
//! Positions are signed so that direction arithmetic can step off the
//! board; the resulting candidates are rejected by bounds checks rather
//! than by the arithmetic itself. `y = 0` is the bottom row - gravity
//! pulls toward decreasing `y`.

use serde::{Deserialize, Serialize};

/// A cell position on the board.
///
/// 0-indexed, with `(0, 0)` the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position offset by `(dx, dy)`.
    ///
    /// The result may be out of bounds; callers validate with
    /// `Grid::is_valid_pos`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A swap direction, as produced by the gesture layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The adjacent position one step in this direction.
    #[must_use]
    pub const fn apply(self, pos: Pos) -> Pos {
        match self {
            Direction::Left => pos.offset(-1, 0),
            Direction::Right => pos.offset(1, 0),
            Direction::Up => pos.offset(0, 1),
            Direction::Down => pos.offset(0, -1),
        }
    }
}
