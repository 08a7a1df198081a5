//! The camera: per-pixel ray generation and rendering.

use crate::canvas::Canvas;
use crate::world::{World, MAX_BOUNCES};
use glint_math::{point, SingularMatrix, Transform};
use glint_scene::Ray;

/// A pinhole camera.
///
/// The image plane sits one unit in front of the camera at z = -1 in
/// camera space; `field_of_view` spans the larger image dimension. The
/// camera transform maps world space into camera space (build it with
/// [`Transform::view_transform`]); its inverse is cached on assignment.
#[derive(Debug, Clone)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Transform,
    inverse: Transform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// A camera with an identity transform (at the origin, looking down
    /// -z).
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        let pixel_size = (half_width * 2.0) / hsize as f64;

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Transform::identity(),
            inverse: Transform::identity(),
            half_width,
            half_height,
            pixel_size,
        }
    }

    /// Horizontal image size in pixels.
    pub fn hsize(&self) -> usize {
        self.hsize
    }

    /// Vertical image size in pixels.
    pub fn vsize(&self) -> usize {
        self.vsize
    }

    /// Field of view in radians.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// The world-to-camera transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-space edge length of one pixel on the image plane.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Replace the camera transform.
    pub fn set_transform(&mut self, t: Transform) -> Result<(), SingularMatrix> {
        self.inverse = t.inverse()?;
        self.transform = t;
        Ok(())
    }

    /// The world-space ray through the center of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        // Camera space looks down -z, with +x to the left, which is why
        // the offsets are subtracted.
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self.inverse * point(world_x, world_y, -1.0);
        let origin = self.inverse * point(0.0, 0.0, 0.0);
        let direction = (pixel - origin).normalize();
        Ray::new(origin, direction)
    }

    /// Render the world to a canvas.
    pub fn render(&self, world: &World) -> Canvas {
        self.render_with(world, |_| {})
    }

    /// Render the world to a canvas, reporting each finished row.
    pub fn render_with<F: FnMut(usize)>(&self, world: &World, mut on_row: F) -> Canvas {
        let mut image = Canvas::new(self.hsize, self.vsize);
        for y in 0..self.vsize {
            for x in 0..self.hsize {
                let ray = self.ray_for_pixel(x, y);
                let color = world.color_at(&ray, MAX_BOUNCES);
                image.write_pixel(x, y, color);
            }
            on_row(y);
        }
        image
    }
}
