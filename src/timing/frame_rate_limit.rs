use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use super::FrameRateLimit;

impl FrameRateLimit {
    /// Create a new frame rate limit for a given target fps.
    pub fn new(target_fps: u32, frames_to_track: usize) -> Self {
        Self {
            frames_to_track: frames_to_track.max(1),
            frame_starts: VecDeque::with_capacity(frames_to_track + 1),
            target_duration: Duration::from_secs(1) / target_fps.max(1),
        }
    }

    /// Call at the beginning of each frame to establish the start-point when
    /// computing elapsed time.
    pub fn start_frame(&mut self, now: Instant) {
        if self.frame_starts.len() >= self.frames_to_track {
            self.frame_starts.pop_back();
        }
        self.frame_starts.push_front(now);
    }

    /// How much of the current frame's budget is left at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.frame_starts.front() {
            Some(start) => self
                .target_duration
                .saturating_sub(now.saturating_duration_since(*start)),
            None => Duration::ZERO,
        }
    }

    /// Sleep for any remaining time in the target fps.
    pub fn sleep_to_limit(&self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            spin_sleep::sleep(remaining);
        }
    }

    /// The average time between the tracked frame starts.
    pub fn avg_frame_time(&self, now: Instant) -> Duration {
        match self.frame_starts.back() {
            Some(oldest) => {
                now.saturating_duration_since(*oldest)
                    / self.frame_starts.len() as u32
            }
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn remaining_budget_shrinks_with_elapsed_time() {
        let start = Instant::now();
        let mut limit = FrameRateLimit::new(10, 4);
        assert_eq!(limit.remaining(start), Duration::ZERO);

        limit.start_frame(start);
        assert_eq!(limit.remaining(start), Duration::from_millis(100));
        assert_eq!(
            limit.remaining(start + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        assert_eq!(
            limit.remaining(start + Duration::from_millis(250)),
            Duration::ZERO
        );
    }

    #[test]
    fn average_covers_only_tracked_frames() {
        let start = Instant::now();
        let mut limit = FrameRateLimit::new(60, 2);
        for frame in 0..5 {
            limit.start_frame(start + Duration::from_millis(frame * 10));
        }
        // frames at 30ms and 40ms are the only ones kept
        assert_eq!(
            limit.avg_frame_time(start + Duration::from_millis(50)),
            Duration::from_millis(10)
        );
    }
}
