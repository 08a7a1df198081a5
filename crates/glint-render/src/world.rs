//! The world: light, shapes, and recursive color resolution.

use glint_math::{Color, Tuple};
use glint_scene::{Comps, Intersections, PointLight, Ray, Shape, ShapeArena, ShapeId};

/// Default recursion allowance for reflection and refraction. The counter
/// is the sole termination guarantee for mutually reflective surfaces; it
/// is decremented and checked before every recursive bounce.
pub const MAX_BOUNCES: u32 = 5;

/// A renderable scene: one optional point light plus the shape arena and
/// the list of root shapes. Groups nest beneath their root entry.
///
/// Worlds are assembled up front and read-only during rendering; every
/// query below takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Arena owning every shape in the scene, roots and children alike.
    pub shapes: ShapeArena,
    /// The scene's light. A lightless world shades to black.
    pub light: Option<PointLight>,
    roots: Vec<ShapeId>,
}

impl World {
    /// An empty world with no light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a shape into the arena and register it as a root.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.shapes.insert(shape);
        self.roots.push(id);
        id
    }

    /// Register an already-inserted shape (typically a group built
    /// elsewhere in the arena) as a root.
    pub fn add_root(&mut self, id: ShapeId) {
        self.roots.push(id);
    }

    /// The root shapes, in insertion order.
    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    /// Every intersection of the ray with the scene, sorted ascending
    /// by t.
    pub fn intersect(&self, ray: &Ray) -> Intersections {
        let mut xs = Intersections::new();
        for &root in &self.roots {
            xs.extend(self.shapes.intersect(root, ray));
        }
        xs.sort_by_t();
        xs
    }

    /// Is the point cut off from the light?
    ///
    /// Shadowed iff something stands strictly between the point and the
    /// light: an occluder beyond the light does not cast a shadow.
    pub fn is_shadowed(&self, point: &Tuple) -> bool {
        let Some(light) = &self.light else {
            return false;
        };
        let v = light.position - point;
        let distance = v.norm();
        let direction = v.normalize();

        let xs = self.intersect(&Ray::new(*point, direction));
        match xs.hit() {
            Some(hit) => hit.t < distance,
            None => false,
        }
    }

    /// Shade an intersection from its precomputed context.
    ///
    /// Local Phong lighting plus the reflected and refracted
    /// contributions; a surface that is both reflective and transparent
    /// blends the two with the Schlick reflectance.
    pub fn shade_hit(&self, comps: &Comps, remaining: u32) -> Color {
        let Some(light) = &self.light else {
            return Color::BLACK;
        };
        let shadowed = self.is_shadowed(&comps.over_point);
        let material = &self.shapes[comps.shape].material;
        let surface = material.lighting(
            &self.shapes,
            comps.shape,
            light,
            &comps.over_point,
            &comps.eyev,
            &comps.normalv,
            shadowed,
        );
        let reflected = self.reflected_color(comps, remaining);
        let refracted = self.refracted_color(comps, remaining);

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = comps.schlick();
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    /// The color seen along a ray, recursing at most `remaining` more
    /// bounces. Black when nothing is hit.
    pub fn color_at(&self, ray: &Ray, remaining: u32) -> Color {
        let xs = self.intersect(ray);
        match xs.hit() {
            None => Color::BLACK,
            Some(hit) => {
                let comps = hit.prepare_computations(&self.shapes, ray, &xs);
                self.shade_hit(&comps, remaining)
            }
        }
    }

    /// The contribution reflected off the surface, scaled by the
    /// material's reflective coefficient. Black once the bounce budget is
    /// spent or for non-reflective materials.
    pub fn reflected_color(&self, comps: &Comps, remaining: u32) -> Color {
        if remaining < 1 {
            return Color::BLACK;
        }
        let reflective = self.shapes[comps.shape].material.reflective;
        if reflective == 0.0 {
            return Color::BLACK;
        }
        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        self.color_at(&reflect_ray, remaining - 1) * reflective
    }

    /// The contribution transmitted through the surface, scaled by the
    /// material's transparency. Black once the bounce budget is spent,
    /// for opaque materials, and under total internal reflection.
    pub fn refracted_color(&self, comps: &Comps, remaining: u32) -> Color {
        if remaining < 1 {
            return Color::BLACK;
        }
        let transparency = self.shapes[comps.shape].material.transparency;
        if transparency == 0.0 {
            return Color::BLACK;
        }

        // Snell's law: find the refracted direction, or bail out when the
        // angle is past critical.
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(&comps.normalv);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return Color::BLACK;
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);
        self.color_at(&refract_ray, remaining - 1) * transparency
    }
}
