use crate::{
    graphics::{ProgramKind, TextureSlot, Uniform, UniformBlock, UniformValue},
    passes::Pass,
};

/// One Jacobi relaxation step for the pressure Poisson equation.
#[derive(Copy, Clone, Debug)]
pub struct PressureIteration {
    pub divergence: TextureSlot,
    pub pressure: TextureSlot,
}

impl Pass for PressureIteration {
    fn program(&self) -> ProgramKind {
        ProgramKind::Pressure
    }

    fn set_uniforms(&self, uniforms: &mut UniformBlock) {
        uniforms
            .set(Uniform::Divergence, UniformValue::Sampler(self.divergence))
            .set(Uniform::Pressure, UniformValue::Sampler(self.pressure));
    }
}
