use crate::{
    graphics::{FilterMode, TextureDesc},
    math::{lerp, Vec2, Vec4},
};

/// A texture living in CPU memory.
///
/// Row zero is the bottom of the texture so texture coordinates match the
/// conventions used by the programs: (0, 0) is the bottom-left corner and
/// (1, 1) is the top-right corner.
pub(super) struct Texture {
    pub desc: TextureDesc,
    texels: Vec<Vec4>,
}

impl Texture {
    /// Create a texture with every texel cleared to zero.
    pub fn new(desc: TextureDesc) -> Self {
        let texels = vec![Vec4::zeros(); desc.texel_count()];
        Self { desc, texels }
    }

    pub fn texels(&self) -> &[Vec4] {
        &self.texels
    }

    /// Replace the contents, dropping any channels the format cannot hold.
    pub fn store(&mut self, mut texels: Vec<Vec4>) {
        debug_assert_eq!(texels.len(), self.texels.len());
        let channels = self.desc.format.channel_count();
        for texel in &mut texels {
            for channel in channels..4 {
                texel[channel] = 0.0;
            }
        }
        self.texels = texels;
    }

    /// Read a texel, clamping the coordinates to the border.
    pub fn fetch(&self, x: i64, y: i64) -> Vec4 {
        let x = x.clamp(0, self.desc.width as i64 - 1) as usize;
        let y = y.clamp(0, self.desc.height as i64 - 1) as usize;
        self.texels[x + y * self.desc.width as usize]
    }

    /// Sample at a texture coordinate using the texture's filter mode.
    ///
    /// Coordinates outside [0, 1] clamp to the border texels.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let x = uv.x * self.desc.width as f32;
        let y = uv.y * self.desc.height as f32;
        match self.desc.filter {
            FilterMode::Nearest => {
                self.fetch(x.floor() as i64, y.floor() as i64)
            }
            FilterMode::Linear => {
                // texel centers sit at half-integer coordinates
                let x = x - 0.5;
                let y = y - 0.5;
                let x0 = x.floor();
                let y0 = y.floor();
                let (fx, fy) = (x - x0, y - y0);
                let (x0, y0) = (x0 as i64, y0 as i64);

                let bottom = lerp(
                    self.fetch(x0, y0),
                    self.fetch(x0 + 1, y0),
                    fx,
                );
                let top = lerp(
                    self.fetch(x0, y0 + 1),
                    self.fetch(x0 + 1, y0 + 1),
                    fx,
                );
                lerp(bottom, top, fy)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphics::ChannelFormat;

    fn ramp(filter: FilterMode) -> Texture {
        let mut texture = Texture::new(TextureDesc::new(
            "ramp",
            (2, 1),
            ChannelFormat::R,
            filter,
        ));
        texture.store(vec![
            Vec4::new(0.0, 7.0, 7.0, 7.0),
            Vec4::new(1.0, 7.0, 7.0, 7.0),
        ]);
        texture
    }

    #[test]
    fn store_masks_channels_outside_the_format() {
        let texture = ramp(FilterMode::Nearest);
        assert_eq!(texture.fetch(1, 0), Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn linear_sampling_interpolates_between_centers() {
        let texture = ramp(FilterMode::Linear);
        let mid = texture.sample(Vec2::new(0.5, 0.5));
        assert!((mid.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sampling_outside_clamps_to_the_border() {
        let texture = ramp(FilterMode::Linear);
        assert_eq!(texture.sample(Vec2::new(-3.0, 0.5)).x, 0.0);
        assert_eq!(texture.sample(Vec2::new(4.0, 9.0)).x, 1.0);
    }
}
