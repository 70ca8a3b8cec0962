//! Game module - the game-state machine
//!
//! Ties together the board, the active piece and the piece source. Handles
//! spawning, movement, rotation, locking, row clearing, scoring and game over.
//!
//! Lock rule: any blocked downward move locks the piece immediately (no lock
//! delay). Cells of a piece locked partially above row 0 are dropped.

use crate::board::Board;
use crate::piece::{fits_at, ActivePiece};
use crate::rng::{PieceRng, PieceSource};
use crate::shapes::base_shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    CoreLastEvent, GameAction, GamePhase, MoveOutcome, DROP_INTERVAL_MS, POINTS_PER_ROW,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<S = PieceRng> {
    board: Board,
    active: Option<ActivePiece>,
    pieces: S,
    phase: GamePhase,
    score: u32,
    /// Rows cleared this game.
    lines: u32,
    pieces_locked: u32,
    /// Time accumulated towards the next automatic drop.
    drop_counter_ms: u32,
    /// Last lock/game-over event (consumed by observers).
    last_event: Option<CoreLastEvent>,
}

impl GameEngine<PieceRng> {
    /// Create an idle game whose pieces come from a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_source(PieceRng::new(seed))
    }
}

impl<S: PieceSource> GameEngine<S> {
    /// Create an idle game drawing pieces from `pieces`
    pub fn with_source(pieces: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            pieces,
            phase: GamePhase::Idle,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            drop_counter_ms: 0,
            last_event: None,
        }
    }

    /// Reset board and score, mark the game active and spawn the first piece.
    ///
    /// Always performs the full reset, so it doubles as restart.
    pub fn start(&mut self) {
        self.board.reset();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.phase = GamePhase::Running;
        self.spawn();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True between start and the spawn collision that ends the game.
    pub fn game_active(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions in tests and benches.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece from the source
    ///
    /// Only reached from `start` and `lock_piece`; does nothing unless the game
    /// is running. Returns false on spawn collision: the game ends and the
    /// blocked piece is not placed.
    fn spawn(&mut self) -> bool {
        if !self.game_active() {
            return false;
        }
        let kind = self.pieces.next_kind();
        let piece = ActivePiece::spawn_with_shape(kind, base_shape(kind));

        if !piece.fits(&self.board) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            let mut event = self.last_event.unwrap_or_default();
            event.game_over = true;
            self.last_event = Some(event);
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Move the active piece by (dx, dy)
    ///
    /// A blocked move with `dy == 1` locks the piece: merge, clear rows,
    /// score, spawn. Any other blocked move changes nothing.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if !self.game_active() {
            return MoveOutcome::Blocked;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Blocked;
        };

        let candidate = active.translated(dx, dy);
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            return MoveOutcome::Moved;
        }

        if dy == 1 {
            self.lock_piece();
            return MoveOutcome::Locked;
        }

        MoveOutcome::Blocked
    }

    /// Rotate the active piece clockwise in place
    ///
    /// The rotated matrix is checked at the unchanged position only; there
    /// are no wall kicks. Returns whether the rotation was applied.
    pub fn rotate(&mut self) -> bool {
        if !self.game_active() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_clockwise();
        if !fits_at(&self.board, &rotated, active.x, active.y) {
            return false;
        }

        self.active = Some(active.with_shape(rotated));
        true
    }

    /// Merge the active piece into the board and continue with the next one
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge_piece(&active);
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        let rows_cleared = self.board.clear_full_rows().len() as u32;
        let points = rows_cleared * POINTS_PER_ROW;
        self.lines = self.lines.saturating_add(rows_cleared);
        self.score = self.score.saturating_add(points);

        self.last_event = Some(CoreLastEvent {
            locked: true,
            rows_cleared,
            points,
            game_over: false,
        });

        self.spawn();
    }

    /// Take and clear the last lock/game-over event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    /// Advance the automatic-drop counter by `elapsed_ms`
    ///
    /// Once the counter exceeds the drop interval the piece moves down one row
    /// and the counter restarts from zero. Returns the outcome of that drop.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<MoveOutcome> {
        if !self.game_active() {
            return None;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms <= DROP_INTERVAL_MS {
            return None;
        }

        self.drop_counter_ms = 0;
        Some(self.move_piece(0, 1))
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0) == MoveOutcome::Moved,
            GameAction::MoveRight => self.move_piece(1, 0) == MoveOutcome::Moved,
            GameAction::SoftDrop => self.move_piece(0, 1) != MoveOutcome::Blocked,
            GameAction::Rotate => self.rotate(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }
}

impl Default for GameEngine<PieceRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
