//! Session orchestration: swap handling and the cascade loop.

pub mod session;

pub use session::{CancelToken, GameSession, SessionState};
