//! Session - the host-side driver around one [`GameEngine`].
//!
//! The session is what a frontend talks to: it forwards frames and input to
//! the engine, keeps the elapsed-time clock, and watches for the end of a
//! game to stop the clock and record the session high score.

use log::{debug, info};

use crate::core::{GameEngine, GameSnapshot, PieceRng, PieceSource};
use crate::types::{GameAction, MoveOutcome};
use crate::GameClock;

/// Elapsed time and best score, for the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub elapsed_secs: u32,
    pub high_score: u32,
    pub games_played: u32,
    pub last_final_score: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Session<S = PieceRng> {
    engine: GameEngine<S>,
    clock: GameClock,
    high_score: u32,
    games_played: u32,
    last_final_score: Option<u32>,
}

impl<S: PieceSource> Session<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine,
            clock: GameClock::new(),
            high_score: 0,
            games_played: 0,
            last_final_score: None,
        }
    }

    /// Start a new game (or restart), resetting the clock at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.engine.start();
        self.clock.start(now_ms);
        self.games_played = self.games_played.wrapping_add(1);
        info!("[Session] Game {} started", self.games_played);
        self.observe();
    }

    /// Advance one frame: feed the elapsed delta to the engine's drop timer.
    ///
    /// Returns the outcome of the automatic drop when one happened.
    pub fn frame(&mut self, now_ms: u64) -> Option<MoveOutcome> {
        let delta = self.clock.frame(now_ms);
        if !self.engine.game_active() {
            return None;
        }
        let outcome = self.engine.tick(delta);
        self.observe();
        outcome
    }

    /// Forward a player action.
    ///
    /// Movement and rotation are ignored unless a game is running; `Start`
    /// is only accepted when one is not.
    pub fn dispatch(&mut self, action: GameAction, now_ms: u64) -> bool {
        let accepted = (action == GameAction::Start) != self.engine.game_active();
        if !accepted {
            debug!(
                "[Session] Ignored {} while {}",
                action.as_str(),
                self.engine.phase().as_str()
            );
            return false;
        }

        if action == GameAction::Start {
            self.start(now_ms);
            return true;
        }

        let changed = self.engine.apply_action(action);
        self.observe();
        changed
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<S> {
        &mut self.engine
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    pub fn game_active(&self) -> bool {
        self.engine.game_active()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    /// Best final score of any game finished in this process.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            elapsed_secs: self.clock.elapsed_secs(),
            high_score: self.high_score,
            games_played: self.games_played,
            last_final_score: self.last_final_score,
        }
    }

    fn observe(&mut self) {
        if let Some(ev) = self.engine.take_last_event() {
            if ev.locked {
                debug!(
                    "[Session] Piece locked: rows={} points={} score={}",
                    ev.rows_cleared,
                    ev.points,
                    self.engine.score()
                );
            }
        }

        if self.clock.is_running() && self.engine.game_over() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.clock.stop();
        let score = self.engine.score();
        self.last_final_score = Some(score);
        info!(
            "[Session] Game {} over: score={} lines={} time={}s",
            self.games_played,
            score,
            self.engine.lines(),
            self.clock.elapsed_secs()
        );
        if score > self.high_score {
            self.high_score = score;
            info!("[Session] New high score: {}", score);
        }
    }
}

impl Default for Session<PieceRng> {
    fn default() -> Self {
        Self::new(GameEngine::default())
    }
}
