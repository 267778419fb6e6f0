//! Frame timing.
//!
//! The simulation measures wall-clock time between frames with a
//! FrameClock. Interactive frontends additionally pace themselves with a
//! FrameRateLimit so a light workload doesn't spin the CPU.

mod frame_clock;
mod frame_rate_limit;

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

pub use self::frame_clock::{clamp_dt, FrameClock};

/// Sleeps away whatever is left of each frame's time budget.
///
/// Without a limit the window frontend would present as fast as it can, which
/// is wasted work for a simulation whose step is capped anyway.
pub struct FrameRateLimit {
    frames_to_track: usize,
    frame_starts: VecDeque<Instant>,
    target_duration: Duration,
}
