use std::time::{Duration, Instant};

/// Timing of one presented frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, capped at the clock's maximum.
    pub dt: f32,

    /// Time since the clock started.
    pub elapsed: Duration,

    /// Zero-based index of this frame.
    pub frame_index: u64,
}

/// Monotonic clock for one frame loop.
///
/// Long stalls (debugger, minimized window) are capped so a single slow
/// frame does not dominate the reported delta.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last: Instant,
    frames: u64,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(Duration::from_millis(250))
    }

    pub fn with_max_delta(dt_max: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            frames: 0,
            dt_max,
        }
    }

    /// Marks one presented frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.started),
            frame_index: self.frames,
        };
        self.frames += 1;
        ft
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_count_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frames(), 0);

        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn delta_is_capped() {
        let mut clock = FrameClock::with_max_delta(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));

        let ft = clock.tick();
        assert_eq!(ft.dt, 0.0);
        assert!(ft.elapsed >= Duration::from_millis(2));
    }
}
