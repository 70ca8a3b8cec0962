//! Host-side game driver.
//!
//! Wraps a [`core::GameEngine`] with the pieces a frontend needs but the
//! deterministic core does not own: wall-clock frame deltas, the elapsed-time
//! counter, start/restart gating, and the in-memory session high score.

pub mod clock;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::GameClock;
pub use session::{Session, SessionStats};
