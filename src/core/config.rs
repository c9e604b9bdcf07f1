//! Session configuration.
//!
//! The board is configured once at session start and the configuration is
//! immutable for the session's lifetime. There is no process-wide state:
//! everything the simulation needs arrives through `BoardConfig`.

use serde::{Deserialize, Serialize};

use super::gem::GemColor;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: i32 = 7;

/// Default score value for a regular gem.
pub const DEFAULT_REGULAR_SCORE: u32 = 10;

/// Default score value for a bomb gem.
pub const DEFAULT_BOMB_SCORE: u32 = 10;

/// Default retry budget for non-matching gem draws.
pub const DEFAULT_SPAWN_RETRY_BUDGET: u32 = 100;

/// Immutable per-session board configuration.
///
/// Construct with [`BoardConfig::new`] and customize with the `with_*`
/// methods. Dimensions must be positive; the palette must be non-empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board width in cells.
    pub width: i32,

    /// Board height in cells.
    pub height: i32,

    /// Colors regular gems are drawn from.
    pub palette: Vec<GemColor>,

    /// Score value assigned to generated regular gems.
    pub regular_score: u32,

    /// Score value assigned to promoted bomb gems.
    pub bomb_score: u32,

    /// How many redraws a non-matching draw may attempt before accepting
    /// a possibly-matching gem. Bounded effort, not a guarantee.
    pub spawn_retry_budget: u32,

    /// Probability that a refill-spawned gem is a bomb instead of a
    /// retry-drawn regular. 0.0 disables random bomb spawns.
    pub bomb_spawn_chance: f64,
}

impl BoardConfig {
    /// Create a configuration with the given dimensions and defaults for
    /// everything else.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "Board width must be positive");
        assert!(height > 0, "Board height must be positive");

        Self {
            width,
            height,
            palette: GemColor::ALL.to_vec(),
            regular_score: DEFAULT_REGULAR_SCORE,
            bomb_score: DEFAULT_BOMB_SCORE,
            spawn_retry_budget: DEFAULT_SPAWN_RETRY_BUDGET,
            bomb_spawn_chance: 0.0,
        }
    }

    /// Restrict the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<Vec<GemColor>>) -> Self {
        self.palette = palette.into();
        assert!(!self.palette.is_empty(), "Palette must be non-empty");
        self
    }

    /// Set the regular gem score value.
    #[must_use]
    pub fn with_regular_score(mut self, score: u32) -> Self {
        self.regular_score = score;
        self
    }

    /// Set the bomb gem score value.
    #[must_use]
    pub fn with_bomb_score(mut self, score: u32) -> Self {
        self.bomb_score = score;
        self
    }

    /// Set the spawn retry budget.
    #[must_use]
    pub fn with_spawn_retry_budget(mut self, budget: u32) -> Self {
        self.spawn_retry_budget = budget;
        self
    }

    /// Set the random bomb spawn chance.
    #[must_use]
    pub fn with_bomb_spawn_chance(mut self, chance: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&chance),
            "Bomb spawn chance must be in [0, 1]"
        );
        self.bomb_spawn_chance = chance;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE)
    }
}
