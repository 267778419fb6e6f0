use crate::graphics::{GraphicsError, TextureSlot};

/// The named uniform slots exposed by the simulation programs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    TexelSize,
    Dt,
    Dissipation,
    Velocity,
    Source,
    Target,
    Point,
    Color,
    Radius,
    AspectRatio,
    Divergence,
    Pressure,
    Texture,
}

impl Uniform {
    /// The name of the slot as the programs declare it.
    pub fn name(self) -> &'static str {
        match self {
            Uniform::TexelSize => "texelSize",
            Uniform::Dt => "dt",
            Uniform::Dissipation => "dissipation",
            Uniform::Velocity => "uVelocity",
            Uniform::Source => "uSource",
            Uniform::Target => "uTarget",
            Uniform::Point => "point",
            Uniform::Color => "color",
            Uniform::Radius => "radius",
            Uniform::AspectRatio => "aspectRatio",
            Uniform::Divergence => "uDivergence",
            Uniform::Pressure => "uPressure",
            Uniform::Texture => "uTexture",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Sampler(TextureSlot),
}

/// The uniform values bound for a single draw.
#[derive(Clone, Debug, Default)]
pub struct UniformBlock {
    values: Vec<(Uniform, UniformValue)>,
}

impl UniformBlock {
    /// Bind a value to the named slot, replacing anything bound before.
    pub fn set(&mut self, uniform: Uniform, value: UniformValue) -> &mut Self {
        match self.values.iter_mut().find(|(name, _)| *name == uniform) {
            Some(entry) => entry.1 = value,
            None => self.values.push((uniform, value)),
        }
        self
    }

    pub fn get(&self, uniform: Uniform) -> Option<UniformValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == uniform)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, uniform: Uniform) -> bool {
        self.get(uniform).is_some()
    }

    /// Every texture bound as a sampler, with the slot name it is bound to.
    pub fn samplers(
        &self,
    ) -> impl Iterator<Item = (Uniform, TextureSlot)> + '_ {
        self.values.iter().filter_map(|(name, value)| match value {
            UniformValue::Sampler(slot) => Some((*name, *slot)),
            _ => None,
        })
    }

    pub fn float(&self, uniform: Uniform) -> Result<f32, GraphicsError> {
        match self.get(uniform) {
            Some(UniformValue::Float(value)) => Ok(value),
            _ => Err(type_error(uniform, "float")),
        }
    }

    pub fn vec2(&self, uniform: Uniform) -> Result<[f32; 2], GraphicsError> {
        match self.get(uniform) {
            Some(UniformValue::Vec2(value)) => Ok(value),
            _ => Err(type_error(uniform, "vec2")),
        }
    }

    pub fn vec3(&self, uniform: Uniform) -> Result<[f32; 3], GraphicsError> {
        match self.get(uniform) {
            Some(UniformValue::Vec3(value)) => Ok(value),
            _ => Err(type_error(uniform, "vec3")),
        }
    }

    pub fn sampler(
        &self,
        uniform: Uniform,
    ) -> Result<TextureSlot, GraphicsError> {
        match self.get(uniform) {
            Some(UniformValue::Sampler(slot)) => Ok(slot),
            _ => Err(type_error(uniform, "sampler")),
        }
    }
}

fn type_error(uniform: Uniform, expected: &'static str) -> GraphicsError {
    GraphicsError::UniformType {
        uniform: uniform.name(),
        expected,
    }
}
