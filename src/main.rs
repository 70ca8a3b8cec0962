//! Terminal falling-block runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and a framebuffer-based renderer.
//! The game waits on the start screen until Enter (or Space/R) is pressed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_blockfall::config::{init_logging, AppConfig};
use tui_blockfall::core::{GameEngine, GameSnapshot, PieceRng};
use tui_blockfall::engine::Session;
use tui_blockfall::input::{handle_key_event, should_quit, SwipeTracker};
use tui_blockfall::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = AppConfig::from_env();
    config.apply_args(&args)?;
    init_logging(config.log_path.as_deref())?;

    let rng = match config.seed {
        Some(seed) => PieceRng::new(seed),
        None => PieceRng::from_entropy(),
    };
    info!("[Main] Starting (seed={:?})", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, rng);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("[Main] Terminal restore failed: {}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, rng: PieceRng) -> Result<()> {
    let mut session = Session::new(GameEngine::with_source(rng));
    let mut swipes = SwipeTracker::with_config(config.swipe);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let origin = Instant::now();
    let now_ms = || origin.elapsed().as_millis() as u64;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let hud = HudView {
            elapsed_secs: session.elapsed_secs(),
            high_score: session.high_score(),
        };
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("[Main] Quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.dispatch(action, now_ms());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = swipes.handle_mouse(mouse, now_ms()) {
                        session.dispatch(action, now_ms());
                    }
                }
                Event::Resize(_, _) => {
                    swipes.cancel();
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.frame(now_ms());
        }
    }
}
