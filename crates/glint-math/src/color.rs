//! RGB color values with component-wise arithmetic.

use crate::approx_eq;
use std::ops::{Add, Mul, Sub};

/// An RGB color with 0..1 nominal channel range. Values outside the range
/// are legal intermediates (bright lights overdrive channels past 1) and
/// are clamped only at quantization time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Pure black, the color of a missed ray.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Construct a color from channel values.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Approximate channel-wise equality within [`crate::EPSILON`].
    pub fn approx_eq(&self, other: &Color) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }

    /// Quantize to 8-bit channels: scaled by 255, rounded up, clamped.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |c: f64| (c * 255.0).ceil().clamp(0.0, 255.0) as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Hadamard (component-wise) product, used to filter light through a
/// surface color.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}
