//! Shapes, the shape arena, and world/object coordinate conversion.

use crate::intersect;
use crate::intersection::Intersections;
use crate::material::Material;
use crate::ray::Ray;
use glint_math::{cross, SingularMatrix, Transform, Tuple};
use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Stable handle to a shape in a [`ShapeArena`].
    pub struct ShapeId;
}

/// A triangle with precomputed edge vectors and face normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub p1: Tuple,
    /// Second vertex.
    pub p2: Tuple,
    /// Third vertex.
    pub p3: Tuple,
    /// Edge `p2 - p1`.
    pub e1: Tuple,
    /// Edge `p3 - p1`.
    pub e2: Tuple,
    /// Unit face normal, `normalize(e2 × e1)`.
    pub normal: Tuple,
}

impl Triangle {
    /// Precompute edges and the face normal from three vertices.
    pub fn new(p1: Tuple, p2: Tuple, p3: Tuple) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = cross(&e2, &e1).normalize();
        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal,
        }
    }
}

/// The closed set of primitive geometries a [`Shape`] can carry.
///
/// All primitives are defined in their own object space; a shape's
/// transform places them in the world (or in the parent group's space).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Unit sphere centered at the origin.
    Sphere,
    /// The infinite xz plane (y = 0).
    Plane,
    /// Axis-aligned cube spanning [-1, 1] on every axis.
    Cube,
    /// Unit-radius cylinder along the y axis.
    Cylinder {
        /// Lower y bound, exclusive for body hits.
        minimum: f64,
        /// Upper y bound, exclusive for body hits.
        maximum: f64,
        /// Whether the ends are capped with disks.
        closed: bool,
    },
    /// Double-napped unit cone along the y axis; radius equals |y|.
    Cone {
        /// Lower y bound, exclusive for body hits.
        minimum: f64,
        /// Upper y bound, exclusive for body hits.
        maximum: f64,
        /// Whether the ends are capped with disks.
        closed: bool,
    },
    /// A single triangle.
    Triangle(Triangle),
    /// An ordered collection of child shapes.
    Group {
        /// Child handles, in insertion order.
        children: Vec<ShapeId>,
    },
}

/// A shape: geometry, placement transform, material, and an optional link
/// to the enclosing group.
///
/// The transform's inverse and inverse-transpose are cached when the
/// transform is set, so a non-invertible transform surfaces as a typed
/// error during scene assembly and the render path never has to re-invert.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    transform: Transform,
    inverse: Transform,
    inverse_transpose: Transform,
    /// Surface material.
    pub material: Material,
    parent: Option<ShapeId>,
}

impl Shape {
    /// Create a shape with the given geometry, an identity transform, and
    /// the default material.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            transform: Transform::identity(),
            inverse: Transform::identity(),
            inverse_transpose: Transform::identity(),
            material: Material::default(),
            parent: None,
        }
    }

    /// Unit sphere at the origin.
    pub fn sphere() -> Self {
        Self::new(Geometry::Sphere)
    }

    /// Unit sphere with a fully transparent glass material
    /// (transparency 1.0, refractive index 1.5).
    pub fn glass_sphere() -> Self {
        let mut s = Self::sphere();
        s.material.transparency = 1.0;
        s.material.refractive_index = 1.5;
        s
    }

    /// The infinite xz plane.
    pub fn plane() -> Self {
        Self::new(Geometry::Plane)
    }

    /// Axis-aligned unit cube.
    pub fn cube() -> Self {
        Self::new(Geometry::Cube)
    }

    /// Cylinder truncated to `minimum < y < maximum`, optionally capped.
    /// Pass infinite bounds for the untruncated surface.
    pub fn cylinder(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self::new(Geometry::Cylinder {
            minimum,
            maximum,
            closed,
        })
    }

    /// Cone truncated to `minimum < y < maximum`, optionally capped.
    pub fn cone(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self::new(Geometry::Cone {
            minimum,
            maximum,
            closed,
        })
    }

    /// Triangle through three vertices.
    pub fn triangle(p1: Tuple, p2: Tuple, p3: Tuple) -> Self {
        Self::new(Geometry::Triangle(Triangle::new(p1, p2, p3)))
    }

    /// Empty group.
    pub fn group() -> Self {
        Self::new(Geometry::Group {
            children: Vec::new(),
        })
    }

    /// Replace the material, builder style.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Post-multiply `t` onto the current transform.
    ///
    /// Because tuples transform as `M * tuple`, the transform added last
    /// is the first one applied to a point. Fails if the combined
    /// transform is not invertible.
    pub fn set_transform(&mut self, t: Transform) -> Result<(), SingularMatrix> {
        let combined = self.transform * t;
        let inverse = combined.inverse()?;
        self.transform = combined;
        self.inverse = inverse;
        self.inverse_transpose = inverse.transpose();
        Ok(())
    }

    /// Apply a transform, builder style.
    pub fn with_transform(mut self, t: Transform) -> Result<Self, SingularMatrix> {
        self.set_transform(t)?;
        Ok(self)
    }

    /// The shape's geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The accumulated transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Cached inverse of the transform.
    pub fn inverse(&self) -> &Transform {
        &self.inverse
    }

    /// Cached inverse-transpose, used to transform normals.
    pub fn inverse_transpose(&self) -> &Transform {
        &self.inverse_transpose
    }

    /// Handle of the enclosing group, if any.
    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }
}

/// Arena owning every shape in a scene.
///
/// Root shapes and group children alike live here; groups reference their
/// children by id and children point back at their parent by id.
#[derive(Debug, Clone, Default)]
pub struct ShapeArena {
    shapes: SlotMap<ShapeId, Shape>,
}

impl ShapeArena {
    /// Empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a shape, returning its handle.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        self.shapes.insert(shape)
    }

    /// Look up a shape.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Look up a shape mutably.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// Number of shapes in the arena.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when the arena holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append `child` to `group`'s children and record the back-link.
    ///
    /// Panics if `group` does not refer to a [`Geometry::Group`]; that is
    /// a programming error, not a scene-data error.
    pub fn add_child(&mut self, group: ShapeId, child: ShapeId) {
        match &mut self.shapes[group].geometry {
            Geometry::Group { children } => children.push(child),
            other => panic!("add_child on non-group geometry {other:?}"),
        }
        self.shapes[child].parent = Some(group);
    }

    /// The children of a group shape. Empty for non-groups.
    pub fn children(&self, id: ShapeId) -> &[ShapeId] {
        match &self.shapes[id].geometry {
            Geometry::Group { children } => children,
            _ => &[],
        }
    }

    /// Intersect a world-space (or parent-space) ray with a shape.
    ///
    /// The ray is carried into object space by the cached inverse
    /// transform, then handed to the geometry's own intersection routine.
    pub fn intersect(&self, id: ShapeId, ray: &Ray) -> Intersections {
        let shape = &self[id];
        let local_ray = ray.transform(shape.inverse());
        intersect::local_intersect(self, id, shape, &local_ray)
    }

    /// Convert a world point into a shape's object space, applying every
    /// ancestor's inverse from the root downward.
    pub fn world_to_object(&self, id: ShapeId, point: &Tuple) -> Tuple {
        let shape = &self[id];
        let point = match shape.parent {
            Some(parent) => self.world_to_object(parent, point),
            None => *point,
        };
        *shape.inverse() * point
    }

    /// Convert an object-space normal into world space: inverse-transpose,
    /// w forced back to 0, renormalized, then up through the parent chain.
    pub fn normal_to_world(&self, id: ShapeId, normal: &Tuple) -> Tuple {
        let shape = &self[id];
        let mut n = *shape.inverse_transpose() * *normal;
        n.w = 0.0;
        let n = n.normalize();
        match shape.parent {
            Some(parent) => self.normal_to_world(parent, &n),
            None => n,
        }
    }

    /// World-space surface normal of a shape at a world-space point.
    pub fn normal_at(&self, id: ShapeId, world_point: &Tuple) -> Tuple {
        let local_point = self.world_to_object(id, world_point);
        let local_normal = intersect::local_normal_at(&self[id].geometry, &local_point);
        self.normal_to_world(id, &local_normal)
    }
}

impl Index<ShapeId> for ShapeArena {
    type Output = Shape;

    fn index(&self, id: ShapeId) -> &Shape {
        &self.shapes[id]
    }
}

impl IndexMut<ShapeId> for ShapeArena {
    fn index_mut(&mut self, id: ShapeId) -> &mut Shape {
        &mut self.shapes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{approx_eq, point, tuple_eq, vector};
    use std::f64::consts::PI;

    #[test]
    fn test_default_shape_state() {
        let s = Shape::sphere();
        assert!(s.transform().approx_eq(&Transform::identity()));
        assert_eq!(s.material, Material::default());
        assert_eq!(s.parent(), None);
    }

    #[test]
    fn test_set_transform_post_multiplies() {
        let mut s = Shape::sphere();
        s.set_transform(Transform::translation(2.0, 3.0, 4.0)).unwrap();
        assert!(s.transform().approx_eq(&Transform::translation(2.0, 3.0, 4.0)));
        s.set_transform(Transform::scaling(2.0, 2.0, 2.0)).unwrap();
        let expected = Transform::translation(2.0, 3.0, 4.0) * Transform::scaling(2.0, 2.0, 2.0);
        assert!(s.transform().approx_eq(&expected));
    }

    #[test]
    fn test_set_transform_rejects_singular() {
        let mut s = Shape::sphere();
        assert_eq!(
            s.set_transform(Transform::scaling(0.0, 1.0, 1.0)),
            Err(SingularMatrix)
        );
        // state is untouched on failure
        assert!(s.transform().approx_eq(&Transform::identity()));
    }

    #[test]
    fn test_glass_sphere_material() {
        let s = Shape::glass_sphere();
        assert!(approx_eq(s.material.transparency, 1.0));
        assert!(approx_eq(s.material.refractive_index, 1.5));
    }

    #[test]
    fn test_add_child_links_parent() {
        let mut arena = ShapeArena::new();
        let g = arena.insert(Shape::group());
        let s = arena.insert(Shape::sphere());
        arena.add_child(g, s);
        assert_eq!(arena.children(g), &[s]);
        assert_eq!(arena[s].parent(), Some(g));
    }

    #[test]
    #[should_panic]
    fn test_add_child_to_non_group_panics() {
        let mut arena = ShapeArena::new();
        let s1 = arena.insert(Shape::sphere());
        let s2 = arena.insert(Shape::sphere());
        arena.add_child(s1, s2);
    }

    #[test]
    fn test_world_to_object_through_nested_groups() {
        let mut arena = ShapeArena::new();
        let g1 = arena.insert(Shape::group());
        arena[g1].set_transform(Transform::rotation_y(PI / 2.0)).unwrap();
        let g2 = arena.insert(Shape::group());
        arena[g2].set_transform(Transform::scaling(2.0, 2.0, 2.0)).unwrap();
        arena.add_child(g1, g2);
        let s = arena.insert(Shape::sphere());
        arena[s].set_transform(Transform::translation(5.0, 0.0, 0.0)).unwrap();
        arena.add_child(g2, s);

        let p = arena.world_to_object(s, &point(-2.0, 0.0, -10.0));
        assert!(tuple_eq(&p, &point(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_normal_to_world_through_nested_groups() {
        let mut arena = ShapeArena::new();
        let g1 = arena.insert(Shape::group());
        arena[g1].set_transform(Transform::rotation_y(PI / 2.0)).unwrap();
        let g2 = arena.insert(Shape::group());
        arena[g2].set_transform(Transform::scaling(1.0, 2.0, 3.0)).unwrap();
        arena.add_child(g1, g2);
        let s = arena.insert(Shape::sphere());
        arena[s].set_transform(Transform::translation(5.0, 0.0, 0.0)).unwrap();
        arena.add_child(g2, s);

        let sqrt3_over_3 = 3.0_f64.sqrt() / 3.0;
        let n = arena.normal_to_world(s, &vector(sqrt3_over_3, sqrt3_over_3, sqrt3_over_3));
        assert!(tuple_eq(&n, &vector(0.2857, 0.4286, -0.8571)));
    }

    #[test]
    fn test_normal_at_on_grouped_child() {
        let mut arena = ShapeArena::new();
        let g1 = arena.insert(Shape::group());
        arena[g1].set_transform(Transform::rotation_y(PI / 2.0)).unwrap();
        let g2 = arena.insert(Shape::group());
        arena[g2].set_transform(Transform::scaling(1.0, 2.0, 3.0)).unwrap();
        arena.add_child(g1, g2);
        let s = arena.insert(Shape::sphere());
        arena[s].set_transform(Transform::translation(5.0, 0.0, 0.0)).unwrap();
        arena.add_child(g2, s);

        let n = arena.normal_at(s, &point(1.7321, 1.1547, -5.5774));
        assert!(tuple_eq(&n, &vector(0.2857, 0.4286, -0.8571)));
    }

    #[test]
    fn test_translated_shape_normal() {
        let mut arena = ShapeArena::new();
        let s = arena.insert(Shape::sphere());
        arena[s].set_transform(Transform::translation(0.0, 1.0, 0.0)).unwrap();
        let n = arena.normal_at(s, &point(0.0, 1.70711, -0.70711));
        assert!(tuple_eq(&n, &vector(0.0, 0.70711, -0.70711)));
    }

    #[test]
    fn test_transformed_shape_normal() {
        let mut arena = ShapeArena::new();
        let s = arena.insert(Shape::sphere());
        arena[s]
            .set_transform(Transform::scaling(1.0, 0.5, 1.0) * Transform::rotation_z(PI / 5.0))
            .unwrap();
        let s2 = 2.0_f64.sqrt() / 2.0;
        let n = arena.normal_at(s, &point(0.0, s2, -s2));
        assert!(tuple_eq(&n, &vector(0.0, 0.97014, -0.24254)));
    }
}
