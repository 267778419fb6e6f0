use thiserror::Error;

use crate::graphics::{ChannelFormat, ProgramKind, TextureSlot};

#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("No renderable format can hold {:?}", .0)]
    UnsupportedFormat(ChannelFormat),

    #[error(
        "Unable to allocate texture '{}' with extent {}x{}",
        label,
        width,
        height
    )]
    AllocationFailed {
        label: String,
        width: u32,
        height: u32,
    },

    #[error("The device was unable to link the {:?} program", .0)]
    ProgramUnavailable(ProgramKind),

    #[error("The {:?} program requires the '{}' uniform", program, uniform)]
    MissingUniform {
        program: ProgramKind,
        uniform: &'static str,
    },

    #[error("Uniform '{}' was bound but is not a {}", uniform, expected)]
    UniformType {
        uniform: &'static str,
        expected: &'static str,
    },

    #[error(
        "The {:?} program samples {:?} through '{}' while rendering into it",
        program,
        slot,
        uniform
    )]
    FeedbackLoop {
        program: ProgramKind,
        slot: TextureSlot,
        uniform: &'static str,
    },

    #[error("{:?} does not refer to a texture owned by this device", .0)]
    UnknownTexture(TextureSlot),

    #[error(
        "Expected {} texels for {:?} but got {}",
        expected,
        slot,
        actual
    )]
    TexelCountMismatch {
        slot: TextureSlot,
        expected: usize,
        actual: usize,
    },

    #[error("The device was lost, commands are rejected until it is restored")]
    DeviceLost,
}
