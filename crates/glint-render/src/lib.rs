#![warn(missing_docs)]

//! Rendering layer for the glint ray tracer.
//!
//! A [`World`] owns the light and the shape collection and resolves the
//! color seen along a ray, recursing into reflection and refraction up to
//! a bounded depth. A [`Camera`] turns pixel coordinates into world rays
//! and drives the world across a [`Canvas`].

mod camera;
mod canvas;
mod world;

pub use camera::Camera;
pub use canvas::Canvas;
pub use world::{World, MAX_BOUNCES};
