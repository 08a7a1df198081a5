//! Rays: an origin point and a direction vector.

use glint_math::{Transform, Tuple};

/// A ray in world or object space.
///
/// The direction is not required to be unit length; transformed rays keep
/// their scaled direction so that intersection t values remain comparable
/// in the originating space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point (w = 1).
    pub origin: Tuple,
    /// Direction vector (w = 0).
    pub direction: Tuple,
}

impl Ray {
    /// Create a ray from an origin point and a direction vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t`: `origin + direction * t`.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply a transform to both origin and direction.
    pub fn transform(&self, m: &Transform) -> Ray {
        Ray {
            origin: *m * self.origin,
            direction: *m * self.direction,
        }
    }
}
