#![warn(missing_docs)]

//! glint — a small analytic ray tracer.
//!
//! Deterministic Whitted-style ray tracing over an arena-based scene
//! graph: spheres, planes, cubes, cylinders, cones, triangles, and
//! nested groups, with Phong shading, hard shadows, reflection, and
//! refraction.
//!
//! # Example
//!
//! ```rust,no_run
//! use glint::{
//!     point, vector, Camera, Color, PointLight, Shape, Transform, World,
//! };
//!
//! let mut world = World::new();
//! world.light = Some(PointLight::new(point(-10.0, 10.0, -10.0), Color::WHITE));
//! world.add_shape(Shape::plane());
//! let mut ball = Shape::sphere();
//! ball.set_transform(Transform::translation(0.0, 1.0, 0.0)).unwrap();
//! ball.material.color = Color::new(0.2, 0.6, 0.9);
//! world.add_shape(ball);
//!
//! let mut camera = Camera::new(640, 360, std::f64::consts::FRAC_PI_3);
//! camera
//!     .set_transform(Transform::view_transform(
//!         point(0.0, 1.5, -5.0),
//!         point(0.0, 1.0, 0.0),
//!         vector(0.0, 1.0, 0.0),
//!     ))
//!     .unwrap();
//! let image = camera.render(&world);
//! std::fs::write("ball.ppm", image.to_ppm()).unwrap();
//! ```

pub use glint_math::{
    approx_eq, cross, is_point, is_vector, point, reflect, tuple_eq, vector, Color,
    SingularMatrix, Transform, Tuple, EPSILON,
};
pub use glint_obj::{load_obj, parse_obj, ObjError, ObjModel};
pub use glint_render::{Camera, Canvas, World, MAX_BOUNCES};
pub use glint_scene::{
    Comps, Geometry, Intersection, Intersections, Material, Pattern, PatternKind, PointLight,
    Ray, Shape, ShapeArena, ShapeId, Triangle,
};
