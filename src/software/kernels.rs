//! Fragment kernels for each program.
//!
//! Every kernel is evaluated once per target texel with the texel's center
//! as its texture coordinate, the same way a fullscreen quad is rasterized.

use super::texture::Texture;
use crate::{
    graphics::{
        GraphicsError, ProgramKind, TextureSlot, Uniform, UniformBlock,
    },
    math::{Vec2, Vec3, Vec4},
};

trait Kernel {
    fn shade(&self, uv: Vec2) -> Vec4;
}

/// Evaluate the program over a width x height target.
pub(super) fn shade(
    kind: ProgramKind,
    uniforms: &UniformBlock,
    textures: &[Texture],
    (width, height): (u32, u32),
) -> Result<Vec<Vec4>, GraphicsError> {
    let bound = Bound { uniforms, textures };
    let texels = match kind {
        ProgramKind::Advection => run(&Advect::bind(&bound)?, width, height),
        ProgramKind::Splat => run(&Splat::bind(&bound)?, width, height),
        ProgramKind::Divergence => {
            run(&Divergence::bind(&bound)?, width, height)
        }
        ProgramKind::Pressure => run(&Jacobi::bind(&bound)?, width, height),
        ProgramKind::GradientSubtract => {
            run(&GradientSubtract::bind(&bound)?, width, height)
        }
        ProgramKind::Display => run(&Display::bind(&bound)?, width, height),
    };
    Ok(texels)
}

pub(super) fn lookup(
    textures: &[Texture],
    slot: TextureSlot,
) -> Result<&Texture, GraphicsError> {
    textures
        .get(slot.raw() as usize)
        .ok_or(GraphicsError::UnknownTexture(slot))
}

fn run(kernel: &impl Kernel, width: u32, height: u32) -> Vec<Vec4> {
    let mut texels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let uv = Vec2::new(
                (x as f32 + 0.5) / width as f32,
                (y as f32 + 0.5) / height as f32,
            );
            texels.push(kernel.shade(uv));
        }
    }
    texels
}

/// Uniforms resolved against the device's textures.
struct Bound<'a> {
    uniforms: &'a UniformBlock,
    textures: &'a [Texture],
}

impl<'a> Bound<'a> {
    fn texture(&self, uniform: Uniform) -> Result<&'a Texture, GraphicsError> {
        lookup(self.textures, self.uniforms.sampler(uniform)?)
    }

    fn float(&self, uniform: Uniform) -> Result<f32, GraphicsError> {
        self.uniforms.float(uniform)
    }

    fn vec2(&self, uniform: Uniform) -> Result<Vec2, GraphicsError> {
        Ok(Vec2::from(self.uniforms.vec2(uniform)?))
    }

    fn vec3(&self, uniform: Uniform) -> Result<Vec3, GraphicsError> {
        Ok(Vec3::from(self.uniforms.vec3(uniform)?))
    }
}

/// Texture coordinate offsets to the four axis-aligned neighbors.
struct Neighbors {
    left: Vec2,
    right: Vec2,
    top: Vec2,
    bottom: Vec2,
}

impl Neighbors {
    fn around(uv: Vec2, texel_size: Vec2) -> Self {
        Self {
            left: uv - Vec2::new(texel_size.x, 0.0),
            right: uv + Vec2::new(texel_size.x, 0.0),
            top: uv + Vec2::new(0.0, texel_size.y),
            bottom: uv - Vec2::new(0.0, texel_size.y),
        }
    }
}

fn outside(uv: Vec2) -> bool {
    uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0
}

/// Sample a scalar neighbor, falling back to the center value when the
/// neighbor lies outside the grid. This keeps the normal derivative at the
/// walls at zero.
fn scalar_or_center(texture: &Texture, uv: Vec2, center: f32) -> f32 {
    if outside(uv) {
        center
    } else {
        texture.sample(uv).x
    }
}

struct Advect<'t> {
    velocity: &'t Texture,
    source: &'t Texture,
    texel_size: Vec2,
    dt: f32,
    dissipation: f32,
}

impl<'t> Advect<'t> {
    fn bind(bound: &Bound<'t>) -> Result<Self, GraphicsError> {
        Ok(Self {
            velocity: bound.texture(Uniform::Velocity)?,
            source: bound.texture(Uniform::Source)?,
            texel_size: bound.vec2(Uniform::TexelSize)?,
            dt: bound.float(Uniform::Dt)?,
            dissipation: bound.float(Uniform::Dissipation)?,
        })
    }
}

impl Kernel for Advect<'_> {
    fn shade(&self, uv: Vec2) -> Vec4 {
        // velocity is measured in texels per second
        let velocity = self.velocity.sample(uv).xy();
        let traced = uv - velocity.component_mul(&self.texel_size) * self.dt;
        self.source.sample(traced) * self.dissipation
    }
}

struct Splat<'t> {
    target: &'t Texture,
    point: Vec2,
    aspect_ratio: f32,
    color: Vec3,
    radius: f32,
}

impl<'t> Splat<'t> {
    fn bind(bound: &Bound<'t>) -> Result<Self, GraphicsError> {
        Ok(Self {
            target: bound.texture(Uniform::Target)?,
            point: bound.vec2(Uniform::Point)?,
            aspect_ratio: bound.float(Uniform::AspectRatio)?,
            color: bound.vec3(Uniform::Color)?,
            radius: bound.float(Uniform::Radius)?,
        })
    }
}

impl Kernel for Splat<'_> {
    fn shade(&self, uv: Vec2) -> Vec4 {
        let mut offset = uv - self.point;
        offset.x *= self.aspect_ratio;
        let falloff = (-offset.dot(&offset) / self.radius).exp();
        let base = self.target.sample(uv).xyz();
        let splat = base + self.color * falloff;
        Vec4::new(splat.x, splat.y, splat.z, 1.0)
    }
}

struct Divergence<'t> {
    velocity: &'t Texture,
    texel_size: Vec2,
}

impl<'t> Divergence<'t> {
    fn bind(bound: &Bound<'t>) -> Result<Self, GraphicsError> {
        Ok(Self {
            velocity: bound.texture(Uniform::Velocity)?,
            texel_size: bound.vec2(Uniform::TexelSize)?,
        })
    }
}

impl Kernel for Divergence<'_> {
    fn shade(&self, uv: Vec2) -> Vec4 {
        let n = Neighbors::around(uv, self.texel_size);
        let center = self.velocity.sample(uv);

        // Walls reflect the velocity component normal to them.
        let left = if n.left.x < 0.0 {
            -center.x
        } else {
            self.velocity.sample(n.left).x
        };
        let right = if n.right.x > 1.0 {
            -center.x
        } else {
            self.velocity.sample(n.right).x
        };
        let top = if n.top.y > 1.0 {
            -center.y
        } else {
            self.velocity.sample(n.top).y
        };
        let bottom = if n.bottom.y < 0.0 {
            -center.y
        } else {
            self.velocity.sample(n.bottom).y
        };

        let divergence = 0.5 * (right - left + top - bottom);
        Vec4::new(divergence, 0.0, 0.0, 1.0)
    }
}

struct Jacobi<'t> {
    pressure: &'t Texture,
    divergence: &'t Texture,
    texel_size: Vec2,
}

impl<'t> Jacobi<'t> {
    fn bind(bound: &Bound<'t>) -> Result<Self, GraphicsError> {
        Ok(Self {
            pressure: bound.texture(Uniform::Pressure)?,
            divergence: bound.texture(Uniform::Divergence)?,
            texel_size: bound.vec2(Uniform::TexelSize)?,
        })
    }
}

impl Kernel for Jacobi<'_> {
    fn shade(&self, uv: Vec2) -> Vec4 {
        let n = Neighbors::around(uv, self.texel_size);
        let center = self.pressure.sample(uv).x;
        let sum = scalar_or_center(self.pressure, n.left, center)
            + scalar_or_center(self.pressure, n.right, center)
            + scalar_or_center(self.pressure, n.top, center)
            + scalar_or_center(self.pressure, n.bottom, center);
        let divergence = self.divergence.sample(uv).x;
        Vec4::new((sum - divergence) * 0.25, 0.0, 0.0, 1.0)
    }
}

struct GradientSubtract<'t> {
    pressure: &'t Texture,
    velocity: &'t Texture,
    texel_size: Vec2,
}

impl<'t> GradientSubtract<'t> {
    fn bind(bound: &Bound<'t>) -> Result<Self, GraphicsError> {
        Ok(Self {
            pressure: bound.texture(Uniform::Pressure)?,
            velocity: bound.texture(Uniform::Velocity)?,
            texel_size: bound.vec2(Uniform::TexelSize)?,
        })
    }
}

impl Kernel for GradientSubtract<'_> {
    fn shade(&self, uv: Vec2) -> Vec4 {
        let n = Neighbors::around(uv, self.texel_size);
        let center = self.pressure.sample(uv).x;
        let left = scalar_or_center(self.pressure, n.left, center);
        let right = scalar_or_center(self.pressure, n.right, center);
        let top = scalar_or_center(self.pressure, n.top, center);
        let bottom = scalar_or_center(self.pressure, n.bottom, center);

        let gradient = Vec2::new(right - left, top - bottom) * 0.5;
        let velocity = self.velocity.sample(uv).xy() - gradient;
        Vec4::new(velocity.x, velocity.y, 0.0, 1.0)
    }
}

struct Display<'t> {
    texture: &'t Texture,
}

impl<'t> Display<'t> {
    fn bind(bound: &Bound<'t>) -> Result<Self, GraphicsError> {
        Ok(Self {
            texture: bound.texture(Uniform::Texture)?,
        })
    }
}

impl Kernel for Display<'_> {
    fn shade(&self, uv: Vec2) -> Vec4 {
        let color = self.texture.sample(uv);
        Vec4::new(color.x, color.y, color.z, 1.0)
    }
}
