//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state machine. It has **zero
//! dependencies** on UI, timers, or I/O:
//!
//! - **Deterministic**: a seeded [`PieceRng`] reproduces the same game
//! - **Total**: every operation is defined for every reachable state; blocked
//!   moves and spawn collisions are outcomes, never errors or panics
//! - **Zero-allocation hot paths**: board and shapes are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`shapes`]: piece catalog (base matrices, colors) and clockwise rotation
//! - [`board`]: 10x20 grid with the free-cell predicate and row clearing
//! - [`piece`]: the falling piece (kind, shape, position)
//! - [`rng`]: uniform random piece source
//! - [`game`]: [`GameEngine`], the state machine driving everything
//! - [`snapshot`]: render-side copy of the state
//!
//! # Game Rules
//!
//! - Pieces spawn at row 0, horizontally centered
//! - Rotation is clockwise only, checked in place (no wall kicks)
//! - A blocked one-row drop locks the piece immediately (no lock delay)
//! - Each cleared row scores 10 points
//! - A spawn collision ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::{GameAction, MoveOutcome};
//!
//! let mut game = GameEngine::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Drop until the piece locks.
//! while game.move_piece(0, 1) == MoveOutcome::Moved {}
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(game.game_active());
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`] every frame with the elapsed milliseconds; the
//! piece drops one row each time more than 1000ms have accumulated.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game::GameEngine;
pub use piece::{fits_at, ActivePiece};
pub use rng::{PieceRng, PieceSource, ScriptedPieces};
pub use shapes::{base_shape, display_color, random_piece_type, rotated_clockwise, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
