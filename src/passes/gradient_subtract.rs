use crate::{
    graphics::{ProgramKind, TextureSlot, Uniform, UniformBlock, UniformValue},
    passes::Pass,
};

/// Subtracts the pressure gradient from velocity, projecting it towards a
/// divergence-free field.
#[derive(Copy, Clone, Debug)]
pub struct GradientSubtract {
    pub pressure: TextureSlot,
    pub velocity: TextureSlot,
}

impl Pass for GradientSubtract {
    fn program(&self) -> ProgramKind {
        ProgramKind::GradientSubtract
    }

    fn set_uniforms(&self, uniforms: &mut UniformBlock) {
        uniforms
            .set(Uniform::Pressure, UniformValue::Sampler(self.pressure))
            .set(Uniform::Velocity, UniformValue::Sampler(self.velocity));
    }
}
