//! Built-in scene assembly.

use anyhow::Result;
use glint::{
    load_obj, point, vector, Camera, Color, Pattern, PointLight, Shape, Transform, World,
};
use std::f64::consts::PI;
use std::path::Path;

/// Three spheres over a checkered reflective floor: one glassy, one
/// striped, one plain.
pub fn spheres(width: usize, height: usize, fov: f64) -> Result<(World, Camera)> {
    let mut world = World::new();
    world.light = Some(PointLight::new(point(-10.0, 10.0, -10.0), Color::WHITE));

    let mut floor = Shape::plane();
    floor.material.color = Color::new(1.0, 0.9, 0.9);
    floor.material.pattern = Some(Pattern::checkers(Color::WHITE, Color::BLACK));
    floor.material.reflective = 0.5;
    floor.material.specular = 0.0;
    world.add_shape(floor);

    let mut middle = Shape::sphere();
    middle.set_transform(Transform::translation(-0.5, 1.0, 0.5))?;
    middle.material.transparency = 0.9;
    middle.material.diffuse = 0.1;
    middle.material.reflective = 0.9;
    middle.material.refractive_index = 1.5;
    middle.material.specular = 1.0;
    middle.material.shininess = 300.0;
    world.add_shape(middle);

    let mut right = Shape::sphere();
    right.set_transform(
        Transform::translation(1.5, 0.5, -0.5) * Transform::scaling(0.5, 1.0, 0.5),
    )?;
    let mut stripes = Pattern::stripe(Color::WHITE, Color::new(0.0, 1.0, 0.0));
    stripes.set_transform(
        Transform::scaling(0.1, 0.1, 0.1) * Transform::rotation_y(PI / 4.0),
    )?;
    right.material.pattern = Some(stripes);
    right.material.color = Color::new(0.1, 1.0, 0.5);
    right.material.diffuse = 0.7;
    right.material.specular = 0.3;
    world.add_shape(right);

    let mut left = Shape::sphere();
    left.set_transform(
        Transform::translation(-1.5, 0.33, -0.75) * Transform::scaling(0.33, 0.33, 0.33),
    )?;
    left.material.color = Color::new(1.0, 0.8, 0.1);
    left.material.diffuse = 0.7;
    left.material.specular = 0.3;
    world.add_shape(left);

    let mut camera = Camera::new(width, height, fov);
    camera.set_transform(Transform::view_transform(
        point(0.0, 1.5, -5.0),
        point(0.0, 1.0, 0.0),
        vector(0.0, 1.0, 0.0),
    ))?;

    Ok((world, camera))
}

/// A lit OBJ mesh viewed from above and to the side.
pub fn mesh(input: &Path, width: usize, height: usize) -> Result<(World, Camera)> {
    let mut world = World::new();
    let model = load_obj(input, &mut world.shapes)?;
    if model.ignored > 0 {
        eprintln!("{}: skipped {} unsupported lines", input.display(), model.ignored);
    }
    let group = model.into_group(&mut world.shapes);
    world.add_root(group);
    world.light = Some(PointLight::new(point(10.0, 5.0, 5.0), Color::WHITE));

    let mut camera = Camera::new(width, height, 0.785);
    camera.set_transform(Transform::view_transform(
        point(-6.0, 6.0, -10.0),
        point(6.0, 0.0, 6.0),
        vector(-0.45, 1.0, 0.0),
    ))?;

    Ok((world, camera))
}
