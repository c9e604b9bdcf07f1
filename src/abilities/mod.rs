//! Secondary effects triggered when special gems are collected.
//!
//! The kind set is small and fixed, so abilities are a closed enum
//! dispatched by a single `match` rather than an open registry. Each
//! ability runs once per step, receives the step's full collected set,
//! and may destroy additional cells through the grid's own accessors -
//! it never touches backing storage.

mod bomb;

pub use bomb::{BOMB_BLAST_OFFSETS, BOMB_DESTROY_DELAY_MS};

use crate::board::{CollectedGemInfo, Grid};
use crate::core::GemKind;

/// A special gem's collection effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GemAbility {
    /// Clears a plus-with-arms blast area around each collected bomb.
    Bomb,
}

impl GemAbility {
    /// Run the ability against the step's collected set.
    ///
    /// Returns the additionally destroyed gems; their cells are already
    /// cleared from the grid when this returns. The triggering gems'
    /// own cells are cleared by generic match collection, not here.
    pub fn execute(self, collected: &[CollectedGemInfo], grid: &mut Grid) -> Vec<CollectedGemInfo> {
        match self {
            GemAbility::Bomb => bomb::execute(collected, grid),
        }
    }
}

/// The ability registered for a gem kind, if any.
#[must_use]
pub fn ability_for(kind: GemKind) -> Option<GemAbility> {
    match kind {
        GemKind::Regular => None,
        GemKind::Bomb => Some(GemAbility::Bomb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_has_no_ability() {
        assert_eq!(ability_for(GemKind::Regular), None);
    }

    #[test]
    fn test_bomb_has_ability() {
        assert_eq!(ability_for(GemKind::Bomb), Some(GemAbility::Bomb));
    }
}
