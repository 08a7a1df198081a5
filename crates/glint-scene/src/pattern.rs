//! Procedural color patterns sampled in pattern space.

use crate::shape::{ShapeArena, ShapeId};
use glint_math::{Color, SingularMatrix, Transform, Tuple};

/// The closed set of pattern functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternKind {
    /// Alternates `a`/`b` by the parity of floor(x).
    Stripe {
        /// Color on even stripes.
        a: Color,
        /// Color on odd stripes.
        b: Color,
    },
    /// Linear blend from `a` to `b` over the fractional part of x.
    Gradient {
        /// Start color.
        a: Color,
        /// End color.
        b: Color,
    },
    /// Concentric rings in the xz plane, alternating by floor distance.
    Ring {
        /// Color on even rings.
        a: Color,
        /// Color on odd rings.
        b: Color,
    },
    /// 3D checkerboard, alternating by the parity of the floor sum.
    Checkers {
        /// Color on even cells.
        a: Color,
        /// Color on odd cells.
        b: Color,
    },
    /// Returns the sampled point's coordinates as a color. Handy for
    /// diagnosing pattern-space transforms.
    Xyz,
}

/// A pattern: a color function plus its own placement transform.
///
/// Like shapes, patterns cache their inverse transform so that sampling
/// never has to invert and a singular transform fails at assembly time.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transform: Transform,
    inverse: Transform,
}

impl Pattern {
    fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: Transform::identity(),
            inverse: Transform::identity(),
        }
    }

    /// Stripes along x.
    pub fn stripe(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Stripe { a, b })
    }

    /// Gradient along x.
    pub fn gradient(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Gradient { a, b })
    }

    /// Rings around the y axis.
    pub fn ring(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Ring { a, b })
    }

    /// 3D checkerboard.
    pub fn checkers(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Checkers { a, b })
    }

    /// Coordinate-echo pattern.
    pub fn xyz() -> Self {
        Self::new(PatternKind::Xyz)
    }

    /// The pattern's color function.
    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// The accumulated pattern transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Post-multiply `t` onto the pattern transform, same composition
    /// convention as shapes.
    pub fn set_transform(&mut self, t: Transform) -> Result<(), SingularMatrix> {
        let combined = self.transform * t;
        let inverse = combined.inverse()?;
        self.transform = combined;
        self.inverse = inverse;
        Ok(())
    }

    /// Sample the pattern at a pattern-space point.
    pub fn pattern_at(&self, p: &Tuple) -> Color {
        match self.kind {
            PatternKind::Stripe { a, b } => {
                if (p.x.floor() as i64) % 2 == 0 {
                    a
                } else {
                    b
                }
            }
            PatternKind::Gradient { a, b } => a + (b - a) * (p.x - p.x.floor()),
            PatternKind::Ring { a, b } => {
                if ((p.x * p.x + p.z * p.z).sqrt().floor() as i64) % 2 == 0 {
                    a
                } else {
                    b
                }
            }
            PatternKind::Checkers { a, b } => {
                if ((p.x.floor() + p.y.floor() + p.z.floor()) as i64) % 2 == 0 {
                    a
                } else {
                    b
                }
            }
            PatternKind::Xyz => Color::new(p.x, p.y, p.z),
        }
    }

    /// Sample the pattern on a shape's surface at a world-space point:
    /// world space → shape object space → pattern space.
    pub fn pattern_at_shape(
        &self,
        arena: &ShapeArena,
        shape: ShapeId,
        world_point: &Tuple,
    ) -> Color {
        let object_point = arena.world_to_object(shape, world_point);
        let pattern_point = self.inverse * object_point;
        self.pattern_at(&pattern_point)
    }
}
