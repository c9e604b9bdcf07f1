//! The board grid: sole owner of the cell array.
//!
//! Cells are stored in a single flat vector indexed `y * width + x` and
//! are only reachable through the bounds-checked accessors here. A cell
//! may be transiently `None` during a resolve step; between player turns
//! every cell is occupied.
//!
//! Out-of-bounds positions are a normal input (direction arithmetic
//! routinely produces them) and are rejected silently: reads return
//! `None`, writes are no-ops, swaps return `false`.

use serde::{Deserialize, Serialize};

use crate::core::{Gem, Pos};

/// A width x height grid of gem cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Gem>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "Grid width must be positive");
        assert!(height > 0, "Grid height must be positive");

        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Strict bounds check.
    #[must_use]
    pub fn is_valid_pos(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Get the gem at a position. `None` for empty cells and for
    /// out-of-bounds positions.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Gem> {
        if !self.is_valid_pos(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    /// Get the gem at raw coordinates.
    #[must_use]
    pub fn get_xy(&self, x: i32, y: i32) -> Option<Gem> {
        self.get(Pos::new(x, y))
    }

    /// Set a cell. Silent no-op for out-of-bounds positions.
    pub fn set(&mut self, pos: Pos, gem: Option<Gem>) {
        if !self.is_valid_pos(pos) {
            return;
        }
        let index = self.index(pos);
        self.cells[index] = gem;
    }

    /// Swap two cells. Returns `false` without mutating if either
    /// position is out of bounds. Swapping empty cells is a valid no-op.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        if !self.is_valid_pos(a) || !self.is_valid_pos(b) {
            return false;
        }

        let (ia, ib) = (self.index(a), self.index(b));
        self.cells.swap(ia, ib);
        true
    }

    /// Iterate all positions in row-major order (x outer, y inner).
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let (width, height) = (self.width, self.height);
        (0..width).flat_map(move |x| (0..height).map(move |y| Pos::new(x, y)))
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y * self.width + pos.x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GemColor;

    fn red() -> Gem {
        Gem::regular(GemColor::Red, 10)
    }

    fn blue() -> Gem {
        Gem::regular(GemColor::Blue, 10)
    }

    #[test]
    fn test_bounds_invariant() {
        let grid = Grid::new(4, 3);

        for x in -1..5 {
            for y in -1..4 {
                let expected = x >= 0 && x < 4 && y >= 0 && y < 3;
                assert_eq!(grid.is_valid_pos(Pos::new(x, y)), expected);
            }
        }
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(3, 3);
        let pos = Pos::new(1, 2);

        assert_eq!(grid.get(pos), None);
        grid.set(pos, Some(red()));
        assert_eq!(grid.get(pos), Some(red()));
        assert_eq!(grid.get_xy(1, 2), Some(red()));

        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_out_of_bounds_never_mutates() {
        let mut grid = Grid::new(3, 3);
        let before = grid.clone();

        grid.set(Pos::new(-1, 0), Some(red()));
        grid.set(Pos::new(0, 3), Some(red()));
        assert_eq!(grid.get(Pos::new(3, 0)), None);
        assert!(!grid.swap(Pos::new(0, 0), Pos::new(3, 0)));

        assert_eq!(grid, before);
    }

    #[test]
    fn test_swap() {
        let mut grid = Grid::new(3, 3);
        grid.set(Pos::new(0, 0), Some(red()));
        grid.set(Pos::new(1, 0), Some(blue()));

        assert!(grid.swap(Pos::new(0, 0), Pos::new(1, 0)));
        assert_eq!(grid.get(Pos::new(0, 0)), Some(blue()));
        assert_eq!(grid.get(Pos::new(1, 0)), Some(red()));
    }

    #[test]
    fn test_swap_involution() {
        let mut grid = Grid::new(3, 3);
        grid.set(Pos::new(0, 1), Some(red()));
        // (2, 2) stays empty - swapping an empty cell is valid.
        let before = grid.clone();

        let a = Pos::new(0, 1);
        let b = Pos::new(2, 2);
        assert!(grid.swap(a, b));
        assert!(grid.swap(a, b));
        assert_eq!(grid, before);

        // Self-swap is also an involution (and an identity).
        assert!(grid.swap(a, a));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::new(2, 2);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(2, 1);
        assert!(!grid.is_full());
        grid.set(Pos::new(0, 0), Some(red()));
        grid.set(Pos::new(1, 0), Some(blue()));
        assert!(grid.is_full());
    }
}
