//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal through crossterm.
//!
//! - [`GameView`] is pure: snapshot + HUD in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and writes changed spans only
//! - Board cells are 2 columns wide to keep blocks roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, HudView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
