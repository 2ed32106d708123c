use web_time::{Duration, Instant};

/// Wall-clock frame timer producing per-frame elapsed seconds and a
/// smoothed FPS readout.
pub struct FrameClock {
    /// Last tick timestamp
    last_frame: Instant,
    /// Minimum frame duration (zero = unlimited)
    min_frame_duration: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            last_frame: Instant::now(),
            min_frame_duration,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Time left until the next frame is due under the FPS target.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Mark the start of a frame and return the seconds elapsed since the
    /// previous tick. Never negative: `Instant` is monotonic.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}
