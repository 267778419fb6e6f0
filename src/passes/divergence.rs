use crate::{
    graphics::{ProgramKind, TextureSlot, Uniform, UniformBlock, UniformValue},
    passes::Pass,
};

/// Central-difference divergence of a velocity field.
///
/// At the grid edges the missing neighbor is the negated center velocity,
/// which models a solid wall.
#[derive(Copy, Clone, Debug)]
pub struct Divergence {
    pub velocity: TextureSlot,
}

impl Pass for Divergence {
    fn program(&self) -> ProgramKind {
        ProgramKind::Divergence
    }

    fn set_uniforms(&self, uniforms: &mut UniformBlock) {
        uniforms.set(Uniform::Velocity, UniformValue::Sampler(self.velocity));
    }
}
