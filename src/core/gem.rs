//! Gem values: colors, kinds, and run compatibility.
//!
//! Gems are immutable `Copy` values. They exist only inside the grid and
//! in the transient info records a resolve step emits - never shared,
//! never referenced from outside.
//!
//! ## Run compatibility
//!
//! Two gems belong to the same run when:
//! - both are `Regular`: equal color
//! - either is special: equal kind (color ignored)
//!
//! The asymmetry is deliberate: a cross-color run containing one bomb of
//! matching kind still counts, while two specials of different kinds
//! never match.

use serde::{Deserialize, Serialize};

/// Gem color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GemColor {
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
}

impl GemColor {
    /// The full palette, in declaration order.
    pub const ALL: [GemColor; 5] = [
        GemColor::Blue,
        GemColor::Green,
        GemColor::Red,
        GemColor::Yellow,
        GemColor::Purple,
    ];
}

/// Gem kind. `Regular` gems match by color; special kinds match by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GemKind {
    Regular,
    Bomb,
}

/// An immutable gem value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gem {
    pub color: GemColor,
    pub kind: GemKind,
    pub score_value: u32,
}

impl Gem {
    /// Create a regular gem.
    #[must_use]
    pub const fn regular(color: GemColor, score_value: u32) -> Self {
        Self {
            color,
            kind: GemKind::Regular,
            score_value,
        }
    }

    /// Create a bomb gem.
    #[must_use]
    pub const fn bomb(color: GemColor, score_value: u32) -> Self {
        Self {
            color,
            kind: GemKind::Bomb,
            score_value,
        }
    }

    /// Whether two gems can participate in the same run.
    #[must_use]
    pub fn is_run_compatible(self, other: Gem) -> bool {
        if self.kind == GemKind::Regular || other.kind == GemKind::Regular {
            return self.color == other.color;
        }

        self.kind == other.kind
    }
}
