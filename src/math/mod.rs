pub type Vec2 = nalgebra::Vector2<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;
pub type Vec4 = nalgebra::Vector4<f32>;

/// Linear interpolation between a and b.
pub fn lerp(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

/// Convert a hue in [0, 1) to a fully saturated rgb color with the given
/// value.
pub fn hue_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let c = value * saturation;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = value - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hue_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        let green = hue_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!((green[1] - 1.0).abs() < 1e-4);
        assert!(green[0].abs() < 1e-4 && green[2].abs() < 1e-4);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec4::new(0.0, 1.0, 2.0, 3.0);
        let b = Vec4::new(4.0, 5.0, 6.0, 7.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}
