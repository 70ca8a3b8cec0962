//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and turns
//! mouse press/release pairs into swipes and taps via [`SwipeTracker`].
//! Each key press produces at most one action; there is no auto-repeat.

pub mod gesture;
pub mod map;

pub use blockfall_types as types;

pub use gesture::{SwipeConfig, SwipeTracker};
pub use map::{handle_key_event, should_quit};
