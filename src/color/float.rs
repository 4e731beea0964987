//! Floating point color math
//!
//! Hue, saturation and value are all on the unit interval. Results are
//! converted to device bytes by truncation.

use super::Rgb;

/// Color with channels in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl FloatColor {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// HSV color with all components in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: f64,
    pub sat: f64,
    pub val: f64,
}

impl Hsv {
    pub const fn new(hue: f64, sat: f64, val: f64) -> Self {
        Self { hue, sat, val }
    }
}

/// Convert HSV to RGB using the six-sector transform
///
/// A hue of exactly `1.0` wraps around to the red sector.
#[allow(clippy::cast_possible_truncation, clippy::many_single_char_names)]
pub fn hsv_to_rgb(hsv: Hsv) -> FloatColor {
    let Hsv { hue, sat, val } = hsv;
    if sat == 0.0 {
        return FloatColor::new(val, val, val);
    }

    let sector = libm::floor(hue * 6.0);
    let f = hue * 6.0 - sector;
    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * f);
    let t = val * (1.0 - sat * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => FloatColor::new(val, t, p),
        1 => FloatColor::new(q, val, p),
        2 => FloatColor::new(p, val, t),
        3 => FloatColor::new(p, q, val),
        4 => FloatColor::new(t, p, val),
        _ => FloatColor::new(val, p, q),
    }
}

/// Convert a float color to device bytes
///
/// Each channel is multiplied by 255 and truncated, no rounding.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn float_to_byte_color(color: FloatColor) -> Rgb {
    Rgb {
        r: (color.r * 255.0) as u8,
        g: (color.g * 255.0) as u8,
        b: (color.b * 255.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_grey() {
        let color = hsv_to_rgb(Hsv::new(0.3, 0.0, 0.5));
        assert_eq!(color, FloatColor::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn primary_hues() {
        let red = float_to_byte_color(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)));
        assert_eq!(red, Rgb::new(255, 0, 0));

        let cyan = float_to_byte_color(hsv_to_rgb(Hsv::new(0.5, 1.0, 1.0)));
        assert_eq!(cyan, Rgb::new(0, 255, 255));
    }

    #[test]
    fn full_hue_wraps_to_red_sector() {
        let wrapped = float_to_byte_color(hsv_to_rgb(Hsv::new(1.0, 0.8, 0.8)));
        assert_eq!(wrapped, Rgb::new(204, 40, 40));
    }

    #[test]
    fn truncates_instead_of_rounding() {
        let color = float_to_byte_color(FloatColor::new(0.999, 0.5, 0.0));
        assert_eq!(color, Rgb::new(254, 127, 0));
    }
}
