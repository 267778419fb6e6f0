//! A RenderDevice which executes every program on the CPU.
//!
//! The software device is the reference implementation of the device
//! interface. It runs each program as a fragment kernel over the target's
//! texels, keeps a log of every draw so callers can audit bindings, and
//! presents into an in-memory RGBA surface.

mod kernels;
mod surface;
mod texture;

use self::texture::Texture;
use crate::{
    graphics::{
        Capabilities, DrawCall, GraphicsError, Program, ProgramKind,
        RenderDevice, RenderTarget, TextureDesc, TextureSlot,
    },
    math::Vec4,
};

pub use self::surface::Surface;

/// What a single draw bound and where it rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRecord {
    pub program: ProgramKind,
    pub target: RenderTarget,
    pub sampled: Vec<TextureSlot>,
}

pub struct SoftwareDevice {
    capabilities: Capabilities,
    textures: Vec<Texture>,
    unavailable_programs: Vec<ProgramKind>,
    linked_programs: u32,
    surface: Surface,
    draw_log: Vec<DrawRecord>,
    lost: bool,
}

impl SoftwareDevice {
    /// Create a device which can render every channel format.
    pub fn new(surface_extent: (u32, u32)) -> Self {
        Self::with_capabilities(surface_extent, Capabilities::default())
    }

    pub fn with_capabilities(
        surface_extent: (u32, u32),
        capabilities: Capabilities,
    ) -> Self {
        Self {
            capabilities,
            textures: vec![],
            unavailable_programs: vec![],
            linked_programs: 0,
            surface: Surface::new(surface_extent),
            draw_log: vec![],
            lost: false,
        }
    }

    /// Make linking the given program fail.
    pub fn without_program(mut self, kind: ProgramKind) -> Self {
        self.unavailable_programs.push(kind);
        self
    }

    pub fn texels(&self, slot: TextureSlot) -> Result<&[Vec4], GraphicsError> {
        Ok(kernels::lookup(&self.textures, slot)?.texels())
    }

    /// Read one texel, with y measured from the bottom row.
    pub fn texel(
        &self,
        slot: TextureSlot,
        x: u32,
        y: u32,
    ) -> Result<Vec4, GraphicsError> {
        let texture = kernels::lookup(&self.textures, slot)?;
        Ok(texture.fetch(x as i64, y as i64))
    }

    /// Overwrite a texture's contents from the host.
    pub fn upload(
        &mut self,
        slot: TextureSlot,
        texels: Vec<Vec4>,
    ) -> Result<(), GraphicsError> {
        let texture = self
            .textures
            .get_mut(slot.raw() as usize)
            .ok_or(GraphicsError::UnknownTexture(slot))?;
        let expected = texture.desc.texel_count();
        if texels.len() != expected {
            return Err(GraphicsError::TexelCountMismatch {
                slot,
                expected,
                actual: texels.len(),
            });
        }
        texture.store(texels);
        Ok(())
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Replace the surface with a cleared one of a new extent. Textures are
    /// unaffected.
    pub fn resize_surface(&mut self, extent: (u32, u32)) {
        if extent != self.surface.extent() {
            self.surface = Surface::new(extent);
        }
    }

    pub fn draw_log(&self) -> &[DrawRecord] {
        &self.draw_log
    }

    /// Reject every draw until the device is restored, the way a GPU context
    /// loss would. Texture contents survive.
    pub fn set_lost(&mut self, lost: bool) {
        self.lost = lost;
    }

    /// Take every draw recorded so far, leaving the log empty.
    pub fn take_draw_log(&mut self) -> Vec<DrawRecord> {
        std::mem::take(&mut self.draw_log)
    }
}

impl RenderDevice for SoftwareDevice {
    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn surface_extent(&self) -> (u32, u32) {
        self.surface.extent()
    }

    fn create_texture(
        &mut self,
        desc: &TextureDesc,
    ) -> Result<TextureSlot, GraphicsError> {
        if !self.capabilities.renderable_formats.contains(&desc.format) {
            return Err(GraphicsError::UnsupportedFormat(desc.format));
        }

        let max = self.capabilities.max_texture_extent;
        if desc.width == 0
            || desc.height == 0
            || desc.width > max
            || desc.height > max
        {
            return Err(GraphicsError::AllocationFailed {
                label: desc.label.clone(),
                width: desc.width,
                height: desc.height,
            });
        }

        let slot = TextureSlot::from_raw(self.textures.len() as u32);
        self.textures.push(Texture::new(desc.clone()));
        log::trace!("allocated {:?} for '{}'", slot, desc.label);
        Ok(slot)
    }

    fn texture_desc(&self, slot: TextureSlot) -> Option<&TextureDesc> {
        self.textures
            .get(slot.raw() as usize)
            .map(|texture| &texture.desc)
    }

    fn link_program(
        &mut self,
        kind: ProgramKind,
    ) -> Result<Program, GraphicsError> {
        if self.unavailable_programs.contains(&kind) {
            return Err(GraphicsError::ProgramUnavailable(kind));
        }
        let program = Program::new(kind, self.linked_programs);
        self.linked_programs += 1;
        Ok(program)
    }

    fn draw(&mut self, call: &DrawCall<'_>) -> Result<(), GraphicsError> {
        if self.lost {
            return Err(GraphicsError::DeviceLost);
        }
        call.validate()?;

        let kind = call.program.kind();
        let extent = match call.target {
            RenderTarget::Texture(slot) => {
                kernels::lookup(&self.textures, slot)?.desc.extent()
            }
            RenderTarget::Surface => self.surface.extent(),
        };

        let shaded =
            kernels::shade(kind, call.uniforms, &self.textures, extent)?;

        match call.target {
            RenderTarget::Texture(slot) => {
                self.textures[slot.raw() as usize].store(shaded)
            }
            RenderTarget::Surface => self.surface.store(&shaded),
        }

        self.draw_log.push(DrawRecord {
            program: kind,
            target: call.target,
            sampled: call.uniforms.samplers().map(|(_, slot)| slot).collect(),
        });
        Ok(())
    }
}
