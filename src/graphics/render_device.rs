use crate::graphics::{
    Capabilities, GraphicsError, Program, ProgramKind, TextureDesc,
    UniformBlock,
};

/// An opaque handle to a texture owned by a RenderDevice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureSlot(u32);

impl TextureSlot {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Where a draw writes its output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    /// One of the device's textures.
    Texture(TextureSlot),

    /// The visible surface. Its extent is owned by the device and can differ
    /// from every texture extent.
    Surface,
}

/// A single full-target draw with a bound program and uniforms.
#[derive(Copy, Clone, Debug)]
pub struct DrawCall<'a> {
    pub program: &'a Program,
    pub uniforms: &'a UniformBlock,
    pub target: RenderTarget,
}

impl<'a> DrawCall<'a> {
    pub fn new(
        program: &'a Program,
        uniforms: &'a UniformBlock,
        target: RenderTarget,
    ) -> Self {
        Self {
            program,
            uniforms,
            target,
        }
    }

    /// Check the draw against the program's declared uniform slots.
    ///
    /// Devices must call this before executing a draw. A texture which is
    /// both sampled and rendered into within the same draw is rejected.
    pub fn validate(&self) -> Result<(), GraphicsError> {
        let kind = self.program.kind();
        for uniform in kind.required_uniforms() {
            if !self.uniforms.contains(*uniform) {
                return Err(GraphicsError::MissingUniform {
                    program: kind,
                    uniform: uniform.name(),
                });
            }
        }

        if let RenderTarget::Texture(target) = self.target {
            let aliased = self
                .uniforms
                .samplers()
                .find(|(_, slot)| *slot == target);
            if let Some((uniform, slot)) = aliased {
                return Err(GraphicsError::FeedbackLoop {
                    program: kind,
                    slot,
                    uniform: uniform.name(),
                });
            }
        }

        Ok(())
    }
}

/// The command surface the simulation drives.
///
/// Commands execute in submission order. The simulation never waits on a
/// previous draw, so a device is free to queue work asynchronously as long as
/// a draw which samples a texture observes every earlier draw into it.
pub trait RenderDevice {
    /// What the device can render to. Fixed for the life of the device.
    fn capabilities(&self) -> &Capabilities;

    /// The extent of the visible surface in pixels.
    fn surface_extent(&self) -> (u32, u32);

    /// Allocate a texture and clear every texel to zero.
    fn create_texture(
        &mut self,
        desc: &TextureDesc,
    ) -> Result<TextureSlot, GraphicsError>;

    /// Get the description a texture was created with.
    fn texture_desc(&self, slot: TextureSlot) -> Option<&TextureDesc>;

    /// Link the program for the given pass.
    fn link_program(
        &mut self,
        kind: ProgramKind,
    ) -> Result<Program, GraphicsError>;

    /// Submit a draw covering the whole target.
    fn draw(&mut self, call: &DrawCall<'_>) -> Result<(), GraphicsError>;
}
