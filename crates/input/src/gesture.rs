//! Swipe/tap recognition for pointer input.
//!
//! A gesture is a press followed by a release. Quick presses that travel far
//! enough along one axis are swipes; everything else is a tap, which rotates.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{GameAction, SWIPE_MAX_MS, SWIPE_MIN_DISTANCE};

/// Thresholds for telling swipes from taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeConfig {
    /// Travel along the dominant axis must exceed this to count as a swipe.
    pub min_distance: u16,
    /// The gesture must finish in less than this many milliseconds.
    pub max_ms: u32,
    /// Units per terminal column when feeding mouse events.
    pub column_units: u16,
    /// Units per terminal row when feeding mouse events.
    pub row_units: u16,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        // A terminal cell is roughly 8x16 pixels.
        Self {
            min_distance: SWIPE_MIN_DISTANCE,
            max_ms: SWIPE_MAX_MS,
            column_units: 8,
            row_units: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GestureStart {
    x: i32,
    y: i32,
    t_ms: u64,
}

/// Turns press/release pairs into game actions.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<GestureStart>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default())
    }

    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Record the start of a gesture. A second begin replaces the first.
    pub fn begin(&mut self, x: i32, y: i32, t_ms: u64) {
        self.start = Some(GestureStart { x, y, t_ms });
    }

    /// Drop a gesture whose release will never arrive (e.g. on resize).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Finish the gesture and classify it.
    ///
    /// Returns `None` for an upward swipe, or when no gesture was started.
    pub fn end(&mut self, x: i32, y: i32, t_ms: u64) -> Option<GameAction> {
        let start = self.start.take()?;
        let elapsed = t_ms.saturating_sub(start.t_ms);
        let dx = x - start.x;
        let dy = y - start.y;
        classify(self.config, dx, dy, elapsed)
    }

    /// Feed a crossterm mouse event (left button only).
    pub fn handle_mouse(&mut self, event: MouseEvent, t_ms: u64) -> Option<GameAction> {
        let x = event.column as i32 * self.config.column_units as i32;
        let y = event.row as i32 * self.config.row_units as i32;
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(x, y, t_ms);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.end(x, y, t_ms),
            _ => None,
        }
    }
}

fn classify(config: SwipeConfig, dx: i32, dy: i32, elapsed_ms: u64) -> Option<GameAction> {
    let quick = elapsed_ms < config.max_ms as u64;
    let min = config.min_distance as i32;

    if quick && dx.abs() > dy.abs() && dx.abs() > min {
        return Some(if dx > 0 {
            GameAction::MoveRight
        } else {
            GameAction::MoveLeft
        });
    }
    if quick && dy.abs() >= dx.abs() && dy.abs() > min {
        // Swipe up is deliberately unbound.
        return if dy > 0 { Some(GameAction::SoftDrop) } else { None };
    }

    Some(GameAction::Rotate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn gesture(dx: i32, dy: i32, ms: u64) -> Option<GameAction> {
        let mut t = SwipeTracker::new();
        t.begin(100, 100, 1_000);
        t.end(100 + dx, 100 + dy, 1_000 + ms)
    }

    #[test]
    fn horizontal_swipes_move() {
        assert_eq!(gesture(40, 5, 200), Some(GameAction::MoveRight));
        assert_eq!(gesture(-40, -5, 200), Some(GameAction::MoveLeft));
    }

    #[test]
    fn vertical_swipes() {
        assert_eq!(gesture(3, 60, 100), Some(GameAction::SoftDrop));
        assert_eq!(gesture(3, -60, 100), None);
    }

    #[test]
    fn short_or_slow_gestures_are_taps() {
        assert_eq!(gesture(0, 0, 50), Some(GameAction::Rotate));
        assert_eq!(gesture(30, 0, 50), Some(GameAction::Rotate));
        assert_eq!(gesture(80, 0, 500), Some(GameAction::Rotate));
        assert_eq!(gesture(80, 0, 499), Some(GameAction::MoveRight));
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.end(0, 0, 0), None);
        t.begin(0, 0, 0);
        assert!(t.is_tracking());
        t.end(0, 0, 10);
        assert!(!t.is_tracking());
    }

    #[test]
    fn cancelled_gesture_yields_nothing() {
        let mut t = SwipeTracker::new();
        t.begin(10, 10, 0);
        t.cancel();
        assert!(!t.is_tracking());
        assert_eq!(t.end(90, 10, 100), None);
    }

    #[test]
    fn custom_thresholds() {
        let mut t = SwipeTracker::with_config(SwipeConfig {
            min_distance: 5,
            max_ms: 100,
            ..SwipeConfig::default()
        });
        t.begin(0, 0, 0);
        assert_eq!(t.end(6, 0, 50), Some(GameAction::MoveRight));
    }

    #[test]
    fn mouse_drag_is_scaled_to_units() {
        let mut t = SwipeTracker::new();
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 6,
            row: 5,
            ..press
        };
        assert_eq!(t.handle_mouse(press, 0), None);
        // 4 columns * 8 units = 32 > 30
        assert_eq!(t.handle_mouse(release, 120), Some(GameAction::MoveLeft));

        let click_up = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        t.handle_mouse(press, 200);
        assert_eq!(t.handle_mouse(click_up, 260), Some(GameAction::Rotate));
    }
}
