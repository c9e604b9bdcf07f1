//! Board state and the read/write primitives that act on it.
//!
//! - `grid`: the cell array and its bounds-checked accessors
//! - `matching`: init-time and gameplay-time match detection
//! - `init`: non-matching initial fill
//! - `refill`: promotion, gravity compaction, and new gem spawns
//! - `change`: the data records a resolve step emits

pub mod change;
pub mod grid;
pub mod init;
pub mod matching;
pub mod refill;

pub use change::{ChangeInfo, CollectedGemInfo, ResolveStep};
pub use grid::Grid;
pub use refill::PROMOTION_RUN_LENGTH;
