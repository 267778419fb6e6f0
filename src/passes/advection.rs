use crate::{
    graphics::{ProgramKind, TextureSlot, Uniform, UniformBlock, UniformValue},
    passes::Pass,
};

/// Semi-Lagrangian transport of `source` along `velocity`.
///
/// Each texel traces backwards through the velocity field by `dt` and takes
/// the bilinearly sampled source value found there, scaled by `dissipation`.
#[derive(Copy, Clone, Debug)]
pub struct Advection {
    pub velocity: TextureSlot,
    pub source: TextureSlot,
    pub dt: f32,
    pub dissipation: f32,
}

impl Pass for Advection {
    fn program(&self) -> ProgramKind {
        ProgramKind::Advection
    }

    fn set_uniforms(&self, uniforms: &mut UniformBlock) {
        uniforms
            .set(Uniform::Velocity, UniformValue::Sampler(self.velocity))
            .set(Uniform::Source, UniformValue::Sampler(self.source))
            .set(Uniform::Dt, UniformValue::Float(self.dt))
            .set(Uniform::Dissipation, UniformValue::Float(self.dissipation));
    }
}
