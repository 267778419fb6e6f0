use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::math::Vec4;

/// The visible surface as 8-bit RGBA pixels.
///
/// Rows are stored bottom-up, which is what the display program produces and
/// what OpenGL style pixel uploads expect.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    pub(super) fn new((width, height): (u32, u32)) -> Self {
        Self {
            width,
            height,
            pixels: [0u8, 0, 0, 255].repeat(width as usize * height as usize),
        }
    }

    pub(super) fn store(&mut self, texels: &[Vec4]) {
        debug_assert_eq!(texels.len() * 4, self.pixels.len());
        for (pixel, texel) in self.pixels.chunks_exact_mut(4).zip(texels) {
            pixel.copy_from_slice(&[
                to_unorm8(texel.x),
                to_unorm8(texel.y),
                to_unorm8(texel.z),
                to_unorm8(texel.w),
            ]);
        }
    }

    pub fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at (x, y) with y measured from the bottom row.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let start = 4 * (x as usize + y as usize * self.width as usize);
        [
            self.pixels[start],
            self.pixels[start + 1],
            self.pixels[start + 2],
            self.pixels[start + 3],
        ]
    }

    /// Raw bottom-up RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy into a top-down image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixel(x, self.height - 1 - y))
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.to_image().save(path)
    }
}

fn to_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn to_image_flips_rows() {
        let mut surface = Surface::new((1, 2));
        surface.store(&[
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.0, 1.0),
        ]);
        let image = surface.to_image();
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn values_are_clamped() {
        assert_eq!(to_unorm8(-2.0), 0);
        assert_eq!(to_unorm8(7.0), 255);
    }
}
