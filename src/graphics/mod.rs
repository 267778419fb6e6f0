//! The device-facing half of the simulation.
//!
//! Nothing in this module knows about fluids. It describes what the core
//! needs from a device: renderable channel formats, texture allocation,
//! programs with named uniform slots, and draw calls that never sample the
//! texture they render into.

mod error;
mod format;
mod program;
mod render_device;
mod uniforms;

pub use self::{
    error::GraphicsError,
    format::{Capabilities, ChannelFormat, FilterMode, TextureDesc},
    program::{Program, ProgramKind, ProgramSet},
    render_device::{DrawCall, RenderDevice, RenderTarget, TextureSlot},
    uniforms::{Uniform, UniformBlock, UniformValue},
};
