//! Phong materials and the local illumination model.

use crate::light::PointLight;
use crate::pattern::Pattern;
use crate::shape::{ShapeArena, ShapeId};
use glint_math::{reflect, Color, Tuple};

/// Surface material: Phong coefficients plus reflection/refraction
/// parameters. A value type compared field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base surface color, used when no pattern is set.
    pub color: Color,
    /// Ambient contribution, 0..1.
    pub ambient: f64,
    /// Diffuse contribution, 0..1.
    pub diffuse: f64,
    /// Specular contribution, 0..1.
    pub specular: f64,
    /// Specular exponent; higher is tighter highlights.
    pub shininess: f64,
    /// Reflection coefficient, 0 (matte) to 1 (mirror).
    pub reflective: f64,
    /// Transparency coefficient, 0 (opaque) to 1 (clear).
    pub transparency: f64,
    /// Refractive index of the material's interior.
    pub refractive_index: f64,
    /// Optional procedural color, overriding `color` when present.
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            pattern: None,
        }
    }
}

impl Material {
    /// Phong lighting at a surface point.
    ///
    /// Ambient is always paid out; a shadowed point gets nothing else.
    /// Diffuse requires the light on the outside of the surface
    /// (light·normal >= 0) and specular additionally requires the eye
    /// inside the reflection lobe.
    pub fn lighting(
        &self,
        arena: &ShapeArena,
        shape: ShapeId,
        light: &PointLight,
        position: &Tuple,
        eyev: &Tuple,
        normalv: &Tuple,
        in_shadow: bool,
    ) -> Color {
        let color = match &self.pattern {
            Some(pattern) => pattern.pattern_at_shape(arena, shape, position),
            None => self.color,
        };
        let effective_color = color * light.intensity;
        let ambient = effective_color * self.ambient;
        if in_shadow {
            return ambient;
        }

        let mut diffuse = Color::BLACK;
        let mut specular = Color::BLACK;
        let lightv = (light.position - position).normalize();
        let light_dot_normal = lightv.dot(normalv);
        if light_dot_normal >= 0.0 {
            diffuse = effective_color * self.diffuse * light_dot_normal;
            let reflectv = reflect(&-lightv, normalv);
            let reflect_dot_eye = reflectv.dot(eyev);
            if reflect_dot_eye > 0.0 {
                let factor = reflect_dot_eye.powf(self.shininess);
                specular = light.intensity * self.specular * factor;
            }
        }
        ambient + diffuse + specular
    }
}
