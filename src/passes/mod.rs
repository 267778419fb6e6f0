//! The numerical passes.
//!
//! Each pass is a plain value holding the texture slots and parameters for a
//! single draw. Passes never hold on to field storage, they just describe
//! which slots to sample.

mod advection;
mod divergence;
mod gradient_subtract;
mod pressure;
mod splat;

use crate::{
    fields::DoubleField,
    graphics::{
        DrawCall, GraphicsError, ProgramKind, ProgramSet, RenderDevice,
        RenderTarget, Uniform, UniformBlock, UniformValue,
    },
};

pub use self::{
    advection::Advection, divergence::Divergence,
    gradient_subtract::GradientSubtract, pressure::PressureIteration,
    splat::Splat,
};

/// A pass which can be bound to its program and drawn into a target.
pub trait Pass {
    /// The program this pass draws with.
    fn program(&self) -> ProgramKind;

    /// Bind pass-specific values. The texel size is bound for every pass
    /// before this is called.
    fn set_uniforms(&self, uniforms: &mut UniformBlock);

    /// Bind the program and uniforms then draw into `target`.
    fn execute<D>(
        &self,
        device: &mut D,
        programs: &ProgramSet,
        texel_size: [f32; 2],
        target: RenderTarget,
    ) -> Result<(), GraphicsError>
    where
        D: RenderDevice + ?Sized,
    {
        let program = programs.get(self.program());
        let mut uniforms = UniformBlock::default();
        uniforms.set(Uniform::TexelSize, UniformValue::Vec2(texel_size));
        self.set_uniforms(&mut uniforms);
        device.draw(&DrawCall::new(program, &uniforms, target))
    }

    /// Draw into the field's write slot then swap so the result becomes the
    /// read side for whatever runs next.
    fn execute_into<D>(
        &self,
        device: &mut D,
        programs: &ProgramSet,
        texel_size: [f32; 2],
        field: &mut DoubleField,
    ) -> Result<(), GraphicsError>
    where
        D: RenderDevice + ?Sized,
    {
        self.execute(
            device,
            programs,
            texel_size,
            RenderTarget::Texture(field.write()),
        )?;
        field.swap();
        Ok(())
    }
}
