//! Point light sources.

use glint_math::{Color, Tuple};

/// A point light: a position and an intensity color. No area, no falloff,
/// hard shadows only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Tuple,
    /// Emitted color at full strength.
    pub intensity: Color,
}

impl PointLight {
    /// Create a point light.
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
