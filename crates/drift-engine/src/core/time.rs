/// Elapsed-time tracker fed by host timestamps.
/// The browser hands `requestAnimationFrame` a millisecond clock; this
/// converts it to seconds since the first tick and folds a per-second
/// FPS counter.
pub struct Clock {
    /// Timestamp of the first tick, in milliseconds.
    start_ms: Option<f64>,
    /// Seconds since the first tick.
    elapsed: f32,
    frames: u32,
    fps: u32,
    fps_window_start: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start_ms: None,
            elapsed: 0.0,
            frames: 0,
            fps: 0,
            fps_window_start: 0.0,
        }
    }

    /// Advance with a host timestamp in milliseconds.
    /// Returns elapsed seconds since the first tick.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let start = match self.start_ms {
            Some(s) => s,
            None => {
                self.start_ms = Some(now_ms);
                self.fps_window_start = now_ms;
                now_ms
            }
        };
        self.elapsed = ((now_ms - start) / 1000.0) as f32;

        self.frames += 1;
        if now_ms - self.fps_window_start >= 1000.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.fps_window_start = now_ms;
        }

        self.elapsed
    }

    /// Seconds since the first tick.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames counted over the most recent full second.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-tick diagnostics returned to the host.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    pub fps: u32,
    pub elapsed: f32,
    pub particle_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_starts_at_zero() {
        let mut clock = Clock::new();
        let elapsed = clock.tick(5000.0);
        assert_eq!(elapsed, 0.0);
    }

    #[test]
    fn elapsed_converts_ms_to_seconds() {
        let mut clock = Clock::new();
        clock.tick(1000.0);
        let elapsed = clock.tick(3500.0);
        assert!((elapsed - 2.5).abs() < 1e-6);
    }

    #[test]
    fn fps_counts_frames_in_window() {
        let mut clock = Clock::new();
        for i in 0..=10 {
            clock.tick(i as f64 * 100.0);
        }
        // 11 ticks landed inside the first full second
        assert_eq!(clock.fps(), 11);
    }

    #[test]
    fn fps_is_zero_before_first_window() {
        let mut clock = Clock::new();
        clock.tick(0.0);
        clock.tick(500.0);
        assert_eq!(clock.fps(), 0);
    }
}
