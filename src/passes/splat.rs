use crate::{
    graphics::{ProgramKind, TextureSlot, Uniform, UniformBlock, UniformValue},
    passes::Pass,
};

/// Adds a Gaussian impulse centered on `point`.
///
/// `point` is in texture coordinates. The horizontal offset is scaled by
/// `aspect_ratio` so the splat stays round on non-square canvases.
#[derive(Copy, Clone, Debug)]
pub struct Splat {
    pub target: TextureSlot,
    pub point: [f32; 2],
    pub aspect_ratio: f32,
    pub impulse: [f32; 3],
    pub radius: f32,
}

impl Pass for Splat {
    fn program(&self) -> ProgramKind {
        ProgramKind::Splat
    }

    fn set_uniforms(&self, uniforms: &mut UniformBlock) {
        uniforms
            .set(Uniform::Target, UniformValue::Sampler(self.target))
            .set(Uniform::AspectRatio, UniformValue::Float(self.aspect_ratio))
            .set(Uniform::Point, UniformValue::Vec2(self.point))
            .set(Uniform::Color, UniformValue::Vec3(self.impulse))
            .set(Uniform::Radius, UniformValue::Float(self.radius));
    }
}
