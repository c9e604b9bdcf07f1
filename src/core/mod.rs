//! Core value types: positions, gems, configuration, RNG.
//!
//! These are the game-agnostic building blocks the board and engine
//! modules are built from. Sessions configure them via `BoardConfig`
//! rather than through globals.

pub mod config;
pub mod gem;
pub mod position;
pub mod rng;

pub use config::BoardConfig;
pub use gem::{Gem, GemColor, GemKind};
pub use position::{Direction, Pos};
pub use rng::{BoardRng, BoardRngState};
