//! Match detection.
//!
//! Two entry points with different semantics, both needed:
//!
//! - [`matches_at_init`] runs during initial fill, when cells ahead of
//!   the row-major cursor are still empty. Only the two backward
//!   formations (two left, two below) can exist, so only those are
//!   checked - formations that would need unfilled neighbors are
//!   structurally impossible.
//! - [`matches_at_gameplay`] runs on a full board and checks all six
//!   axis formations around the gem currently at the position.
//!
//! [`matches`] scans the whole board with 3-forward windows and returns
//! a set: a cross-shaped or longer run shares positions between windows
//! and each must be collected exactly once.
//!
//! Empty cells short-circuit every formation. Boards narrower than 3 in
//! an axis produce no matches in that axis purely because no window
//! fits - there is no special case.

use rustc_hash::FxHashSet;

use crate::core::{Gem, GemColor, Pos};

use super::grid::Grid;

fn is_run(a: Option<Gem>, b: Option<Gem>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.is_run_compatible(b),
        _ => false,
    }
}

/// Would placing a regular gem of `color` at `pos` complete a run, given
/// that fill proceeds row-major and later cells are still empty?
#[must_use]
pub fn matches_at_init(grid: &Grid, pos: Pos, color: GemColor) -> bool {
    let probe = Gem::regular(color, 0);

    if pos.x >= 2 {
        let left1 = grid.get_xy(pos.x - 1, pos.y);
        let left2 = grid.get_xy(pos.x - 2, pos.y);
        if is_run(Some(probe), left1) && is_run(left1, left2) {
            return true;
        }
    }

    if pos.y >= 2 {
        let below1 = grid.get_xy(pos.x, pos.y - 1);
        let below2 = grid.get_xy(pos.x, pos.y - 2);
        if is_run(Some(probe), below1) && is_run(below1, below2) {
            return true;
        }
    }

    false
}

/// Is the gem currently at `pos` part of any run of three or more?
///
/// Checks all six formations: two-left, one-left-one-right, two-right,
/// and their vertical mirrors.
#[must_use]
pub fn matches_at_gameplay(grid: &Grid, pos: Pos) -> bool {
    let target = match grid.get(pos) {
        Some(gem) => Some(gem),
        None => return false,
    };

    // [x] [x] [POS]
    if is_run(target, grid.get_xy(pos.x - 2, pos.y)) && is_run(target, grid.get_xy(pos.x - 1, pos.y))
    {
        return true;
    }

    // [x] [POS] [x]
    if is_run(target, grid.get_xy(pos.x - 1, pos.y)) && is_run(target, grid.get_xy(pos.x + 1, pos.y))
    {
        return true;
    }

    // [POS] [x] [x]
    if is_run(target, grid.get_xy(pos.x + 1, pos.y)) && is_run(target, grid.get_xy(pos.x + 2, pos.y))
    {
        return true;
    }

    // Vertical mirrors of the three formations above.
    if is_run(target, grid.get_xy(pos.x, pos.y - 2)) && is_run(target, grid.get_xy(pos.x, pos.y - 1))
    {
        return true;
    }

    if is_run(target, grid.get_xy(pos.x, pos.y - 1)) && is_run(target, grid.get_xy(pos.x, pos.y + 1))
    {
        return true;
    }

    if is_run(target, grid.get_xy(pos.x, pos.y + 1)) && is_run(target, grid.get_xy(pos.x, pos.y + 2))
    {
        return true;
    }

    false
}

/// Every position currently participating in a run.
#[must_use]
pub fn matches(grid: &Grid) -> FxHashSet<Pos> {
    let mut matched = FxHashSet::default();

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let gem = match grid.get_xy(x, y) {
                Some(gem) => Some(gem),
                None => continue,
            };

            if is_run(gem, grid.get_xy(x + 1, y)) && is_run(gem, grid.get_xy(x + 2, y)) {
                matched.insert(Pos::new(x, y));
                matched.insert(Pos::new(x + 1, y));
                matched.insert(Pos::new(x + 2, y));
            }

            if is_run(gem, grid.get_xy(x, y + 1)) && is_run(gem, grid.get_xy(x, y + 2)) {
                matched.insert(Pos::new(x, y));
                matched.insert(Pos::new(x, y + 1));
                matched.insert(Pos::new(x, y + 2));
            }
        }
    }

    matched
}
