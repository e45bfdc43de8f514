//! Frame clock: clamped per-frame delta and a smoothed FPS estimate.

use web_time::{Duration, Instant};

/// Per-frame delta time with a smoothed FPS readout.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous tick (`None` before the first).
    last_frame: Option<Instant>,
    /// Upper bound on a single delta, so a backgrounded tab does not snap
    /// every page to its target in one frame.
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl FrameClock {
    /// Create a clock that clamps each delta to `max_delta`.
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: None,
            max_delta,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Advance to `now`. Returns seconds since the previous tick, clamped to
    /// `max_delta`; the first tick returns 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(last);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_delta).as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Forget the previous tick; the next one returns 0.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(Instant::now()), 0.0);
    }

    #[test]
    fn delta_is_time_between_ticks() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        let _ = clock.tick(t0);
        let dt = clock.tick(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        let _ = clock.tick(t0);
        assert!((clock.tick(t0 + Duration::from_secs(5)) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn fps_converges() {
        let mut clock = FrameClock::default();
        let mut now = Instant::now();
        let _ = clock.tick(now);
        for _ in 0..500 {
            now += Duration::from_millis(20);
            let _ = clock.tick(now);
        }
        assert!((clock.fps() - 50.0).abs() < 0.5);
    }

    #[test]
    fn reset_restarts_deltas() {
        let mut clock = FrameClock::default();
        let t0 = Instant::now();
        let _ = clock.tick(t0);
        clock.reset();
        assert_eq!(clock.tick(t0 + Duration::from_secs(1)), 0.0);
    }
}
