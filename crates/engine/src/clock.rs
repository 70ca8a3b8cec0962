//! Game clock - converts host timestamps into frame deltas and elapsed seconds.

use crate::types::CLOCK_SECOND_MS;

/// Frame timer plus the once-per-second elapsed counter shown in the HUD.
///
/// Timestamps are milliseconds from any monotonic origin. The first frame
/// after [`GameClock::start`] yields a zero delta, and a timestamp earlier
/// than the previous one is treated as no time passing.
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    running: bool,
    last_frame_ms: Option<u64>,
    second_accumulator_ms: u32,
    elapsed_secs: u32,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset elapsed time and begin counting from `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.last_frame_ms = Some(now_ms);
        self.second_accumulator_ms = 0;
        self.elapsed_secs = 0;
    }

    /// Freeze the elapsed counter. Frame deltas are still reported.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Record a frame at `now_ms` and return the milliseconds since the previous one.
    pub fn frame(&mut self, now_ms: u64) -> u32 {
        let delta = match self.last_frame_ms {
            Some(prev) if now_ms >= prev => (now_ms - prev).min(u32::MAX as u64) as u32,
            _ => 0,
        };
        self.last_frame_ms = Some(now_ms);

        if self.running {
            self.second_accumulator_ms = self.second_accumulator_ms.saturating_add(delta);
            while self.second_accumulator_ms >= CLOCK_SECOND_MS {
                self.second_accumulator_ms -= CLOCK_SECOND_MS;
                self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            }
        }

        delta
    }
}
