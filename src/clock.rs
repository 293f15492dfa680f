//! Fixed-rate tick clock.
//!
//! The integrator is defined per unit tick, so rendering frames are converted
//! into a whole number of 60 Hz simulation ticks. Leftover time carries into
//! the next frame; a long stall is capped rather than replayed so the
//! simulation never spirals trying to catch up.

use std::time::Instant;

/// Simulation ticks per second.
pub const TICK_RATE: f64 = 60.0;

/// Most ticks a single frame may run.
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Accumulates wall-clock time and doles it out as whole ticks.
#[derive(Debug)]
pub struct TickClock {
    last_frame: Instant,
    accumulator: f64,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: 0.0,
        }
    }

    /// Ticks to run for the frame starting now.
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.advance(dt)
    }

    /// Ticks to run for a frame of duration `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulator += dt.max(0.0);
        // Tiny bias so an exact frame duration is not truncated to zero
        // ticks by rounding.
        let ticks = (self.accumulator * TICK_RATE + 1e-9).floor() as u32;
        if ticks > MAX_TICKS_PER_FRAME {
            // Stalled; drop the backlog.
            self.accumulator = 0.0;
            return MAX_TICKS_PER_FRAME;
        }
        self.accumulator = (self.accumulator - ticks as f64 / TICK_RATE).max(0.0);
        ticks
    }

    /// Forget any partial tick and restart from now.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
        self.accumulator = 0.0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_frame() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(1.0 / TICK_RATE), 1);
    }

    #[test]
    fn test_fractional_frames_accumulate() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(0.5 / TICK_RATE), 0);
        assert_eq!(clock.advance(0.6 / TICK_RATE), 1);
    }

    #[test]
    fn test_remainder_carries() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(1.5 / TICK_RATE), 1);
        assert_eq!(clock.advance(0.5 / TICK_RATE), 1);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(10.0), 5);
        // Backlog dropped: the next normal frame is back to one tick.
        assert_eq!(clock.advance(1.0 / TICK_RATE), 1);
    }

    #[test]
    fn test_reset_clears_accumulator() {
        let mut clock = TickClock::new();
        clock.advance(0.9 / TICK_RATE);
        clock.reset();
        assert_eq!(clock.advance(0.5 / TICK_RATE), 0);
    }
}
