//! # gem-board
//!
//! A match-3 board simulation engine: the gameplay core of a
//! tile-matching puzzle game, with no rendering, input, or timing of
//! its own.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Globals**: everything a session needs
//!    arrives through an immutable [`BoardConfig`] at construction.
//!
//! 2. **Deterministic**: all randomness flows through a seeded ChaCha8
//!    RNG, so a seed reproduces a board and its cascades exactly.
//!
//! 3. **Caller-Paced**: the cascade is driven one step at a time; each
//!    step returns plain data records ([`ResolveStep`]) and the caller
//!    decides how to pace or animate between them. The core never
//!    blocks or sleeps.
//!
//! ## Modules
//!
//! - `core`: positions, gems, configuration, RNG
//! - `board`: grid, match detection, initial fill, refill
//! - `abilities`: special-gem effects (the bomb blast)
//! - `engine`: the session state machine driving swaps and cascades
//!
//! ## Example
//!
//! ```
//! use gem_board::{BoardConfig, Direction, GameSession, Pos};
//!
//! let mut session = GameSession::new(BoardConfig::default(), 42);
//!
//! for pos in session.grid().positions().collect::<Vec<_>>() {
//!     for direction in Direction::ALL {
//!         if session.attempt_swap(pos, direction) {
//!             let steps = session.resolve_all();
//!             assert!(!steps.is_empty());
//!             return;
//!         }
//!     }
//! }
//! ```

pub mod abilities;
pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardRng, BoardRngState, Direction, Gem, GemColor, GemKind, Pos,
};

pub use crate::board::{
    ChangeInfo, CollectedGemInfo, Grid, ResolveStep, PROMOTION_RUN_LENGTH,
};

pub use crate::abilities::{ability_for, GemAbility, BOMB_BLAST_OFFSETS, BOMB_DESTROY_DELAY_MS};

pub use crate::engine::{CancelToken, GameSession, SessionState};
