//! Maps the density field onto the visible surface.

use crate::{
    fields::DoubleField,
    graphics::{
        GraphicsError, ProgramKind, ProgramSet, RenderDevice, RenderTarget,
        TextureSlot, Uniform, UniformBlock, UniformValue,
    },
    passes::Pass,
};

/// Copies a texture to the surface, resampling to the surface extent.
#[derive(Copy, Clone, Debug)]
pub struct DisplayPass {
    pub texture: TextureSlot,
}

impl DisplayPass {
    /// Draw the current read side of `density` to the surface.
    pub fn present<D>(
        device: &mut D,
        programs: &ProgramSet,
        density: &DoubleField,
    ) -> Result<(), GraphicsError>
    where
        D: RenderDevice + ?Sized,
    {
        let (width, height) = device.surface_extent();
        let texel_size = [1.0 / width as f32, 1.0 / height as f32];
        Self {
            texture: density.read(),
        }
        .execute(device, programs, texel_size, RenderTarget::Surface)
    }
}

impl Pass for DisplayPass {
    fn program(&self) -> ProgramKind {
        ProgramKind::Display
    }

    fn set_uniforms(&self, uniforms: &mut UniformBlock) {
        uniforms.set(Uniform::Texture, UniformValue::Sampler(self.texture));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        graphics::{ChannelFormat, FilterMode, TextureDesc},
        math::Vec4,
        software::SoftwareDevice,
    };

    #[test]
    fn present_stretches_density_over_the_surface() {
        let mut device = SoftwareDevice::new((8, 4));
        let programs = ProgramSet::link(&mut device).unwrap();
        let density = DoubleField::allocate(
            &mut device,
            TextureDesc::new(
                "density",
                (2, 2),
                ChannelFormat::RGBA,
                FilterMode::Linear,
            ),
        )
        .unwrap();
        device
            .upload(density.read(), vec![Vec4::new(1.0, 0.0, 0.0, 1.0); 4])
            .unwrap();

        DisplayPass::present(&mut device, &programs, &density).unwrap();

        let surface = device.surface();
        assert_eq!(surface.extent(), (8, 4));
        assert_eq!(surface.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(surface.pixel(7, 3), [255, 0, 0, 255]);
    }
}
