use std::time::Instant;

/// Clamp a measured frame time to `[0, max_dt]` seconds.
///
/// Non-finite measurements are treated as zero so a bad clock reading can't
/// inject NaN into the fields.
pub fn clamp_dt(elapsed: f32, max_dt: f32) -> f32 {
    if elapsed.is_finite() {
        elapsed.clamp(0.0, max_dt)
    } else {
        0.0
    }
}

/// Tracks the time since the previous frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameClock {
    last_frame: Instant,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(start: Instant, max_dt: f32) -> Self {
        Self {
            last_frame: start,
            max_dt,
        }
    }

    /// Advance to `now` and return the clamped step in seconds.
    ///
    /// A `now` earlier than the previous frame yields a zero step and leaves
    /// the clock where it was.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        if now > self.last_frame {
            self.last_frame = now;
        }
        clamp_dt(elapsed.as_secs_f32(), self.max_dt)
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}
