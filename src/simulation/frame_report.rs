/// What happened during one simulation step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Frames started since the simulation was created, counting this one.
    pub frame: u64,

    /// The step used, in seconds.
    pub dt: f32,

    /// Pointers whose impulse was injected this frame.
    pub splats: u32,

    /// Jacobi iterations executed this frame.
    pub pressure_iterations: u32,

    /// True when a draw failed and the rest of the frame was skipped.
    pub dropped: bool,
}

impl FrameReport {
    pub(super) fn dropped(frame: u64, dt: f32) -> Self {
        Self {
            frame,
            dt,
            splats: 0,
            pressure_iterations: 0,
            dropped: true,
        }
    }
}
