//! The bomb blast.
//!
//! A collected bomb clears the 8-cell ring around it plus the four
//! orthogonal cells at distance 2 - a plus with arms, not a full 5x5
//! square. Blasted gems carry a destroy delay so the presentation layer
//! can show neighbors vanishing before the bomb itself; the simulation
//! never waits on it.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::{CollectedGemInfo, Grid};
use crate::core::{GemKind, Pos};

/// Blast pattern relative to the bomb: ring plus orthogonal arms.
pub const BOMB_BLAST_OFFSETS: [(i32, i32); 12] = [
    // 3x3 ring
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    // Arms
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
];

/// Presentation hint: blasted neighbors vanish this many milliseconds
/// before the bomb.
pub const BOMB_DESTROY_DELAY_MS: u32 = 250;

/// Destroy every occupied blast cell around the collected bombs.
///
/// Cells occupied by other bombs in the same collected set are skipped -
/// those are cleared by generic collection. Overlapping blasts from two
/// bombs destroy a shared cell once.
pub fn execute(collected: &[CollectedGemInfo], grid: &mut Grid) -> Vec<CollectedGemInfo> {
    let mut bomb_positions: FxHashSet<Pos> = FxHashSet::default();
    for info in collected {
        if info.gem.kind == GemKind::Bomb {
            bomb_positions.insert(info.pos);
        }
    }

    let mut destroyed: FxHashSet<Pos> = FxHashSet::default();
    let mut blast: SmallVec<[CollectedGemInfo; 12]> = SmallVec::new();

    let mut bombs: Vec<Pos> = bomb_positions.iter().copied().collect();
    bombs.sort_unstable();

    for bomb_pos in bombs {
        for (dx, dy) in BOMB_BLAST_OFFSETS {
            let target = bomb_pos.offset(dx, dy);
            if bomb_positions.contains(&target) || destroyed.contains(&target) {
                continue;
            }

            if let Some(gem) = grid.get(target) {
                destroyed.insert(target);
                blast.push(CollectedGemInfo::delayed(target, gem, BOMB_DESTROY_DELAY_MS));
            }
        }
    }

    for info in &blast {
        grid.set(info.pos, None);
    }

    blast.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Gem, GemColor};

    fn filled_grid(width: i32, height: i32) -> Grid {
        let mut grid = Grid::new(width, height);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, Some(Gem::regular(GemColor::Red, 10)));
        }
        grid
    }

    fn bomb_info(pos: Pos) -> CollectedGemInfo {
        CollectedGemInfo::new(pos, Gem::bomb(GemColor::Red, 10))
    }

    #[test]
    fn test_full_blast_destroys_twelve_cells() {
        let mut grid = filled_grid(7, 7);
        let center = Pos::new(3, 3);
        grid.set(center, None); // bomb cell already collected

        let blast = execute(&[bomb_info(center)], &mut grid);

        assert_eq!(blast.len(), 12);
        for info in &blast {
            assert_eq!(info.destroy_delay_ms, Some(BOMB_DESTROY_DELAY_MS));
            assert_eq!(grid.get(info.pos), None);
        }

        // Diagonal distance-2 cells are outside the pattern.
        assert!(grid.get(Pos::new(1, 1)).is_some());
        assert!(grid.get(Pos::new(5, 5)).is_some());
    }

    #[test]
    fn test_corner_blast_clipped_by_bounds() {
        let mut grid = filled_grid(7, 7);
        let corner = Pos::new(0, 0);
        grid.set(corner, None);

        let blast = execute(&[bomb_info(corner)], &mut grid);

        // Only (1,0), (0,1), (1,1), (2,0), (0,2) are in bounds.
        assert_eq!(blast.len(), 5);
    }

    #[test]
    fn test_empty_cells_not_collected() {
        let mut grid = filled_grid(7, 7);
        let center = Pos::new(3, 3);
        grid.set(center, None);
        grid.set(Pos::new(4, 3), None);
        grid.set(Pos::new(3, 4), None);

        let blast = execute(&[bomb_info(center)], &mut grid);
        assert_eq!(blast.len(), 10);
    }

    #[test]
    fn test_overlapping_blasts_deduplicated() {
        let mut grid = filled_grid(7, 7);
        let a = Pos::new(2, 3);
        let b = Pos::new(4, 3);
        grid.set(a, None);
        grid.set(b, None);

        let blast = execute(&[bomb_info(a), bomb_info(b)], &mut grid);

        let positions: FxHashSet<Pos> = blast.iter().map(|info| info.pos).collect();
        assert_eq!(positions.len(), blast.len(), "duplicate blast cell");
        // (3, 3) sits in both blasts.
        assert!(positions.contains(&Pos::new(3, 3)));
    }

    #[test]
    fn test_other_bomb_positions_skipped() {
        // Two bombs adjacent: neither blast may collect the other's
        // cell, even while it still holds a gem.
        let mut grid = filled_grid(7, 7);
        let a = Pos::new(3, 3);
        let b = Pos::new(4, 3);

        let blast = execute(&[bomb_info(a), bomb_info(b)], &mut grid);

        let positions: FxHashSet<Pos> = blast.iter().map(|info| info.pos).collect();
        assert!(!positions.contains(&a));
        assert!(!positions.contains(&b));
    }
}
