//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Automatic drop interval, fixed for the whole game |
//! | `CLOCK_SECOND_MS` | 1000 | Period of the elapsed-time display counter |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic drop interval. There is no level progression.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row.
pub const POINTS_PER_ROW: u32 = 10;

/// Period of the elapsed-seconds counter.
pub const CLOCK_SECOND_MS: u32 = 1000;

/// Minimum travel along the dominant axis for a gesture to count as a swipe.
pub const SWIPE_MIN_DISTANCE: u16 = 30;

/// A gesture must finish within this window to count as a swipe.
pub const SWIPE_MAX_MS: u32 = 500;


/// The seven piece kinds
///
/// Each kind names a piece family; the letter follows the silhouette:
/// - **I**: straight bar
/// - **J** / **L**: hooks (mirror images)
/// - **O**: 2x2 square
/// - **S** / **Z**: skews (mirror images)
/// - **T**: tee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the HUD.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position in [`PieceKind::ALL`] (0-6).
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Non-zero grid code (1-7); 0 is reserved for an empty cell.
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => None,
            c => Self::from_index(c as usize - 1),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied, tagged with the kind that locked there
///   (the tag also selects the render color)
pub type Cell = Option<PieceKind>;

/// Requests a host can make of the engine.
///
/// Produced by keyboard and gesture input, consumed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks it when blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a new game (also used to restart after game over)
    Start,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "start" | "restart" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Start => "start",
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece now sits at the requested position.
    Moved,
    /// The request was rejected; nothing changed.
    Blocked,
    /// A downward move was blocked, so the piece merged into the board.
    Locked,
}

/// Lifecycle of a game.
///
/// `Idle` before the first start, `Running` while a piece is falling,
/// `GameOver` after a spawn collision until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Core-side event emitted after a piece locks or a spawn collides.
///
/// Consumed by observers (the session) to learn about game end without polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreLastEvent {
    pub locked: bool,
    pub rows_cleared: u32,
    pub points: u32,
    pub game_over: bool,
}
