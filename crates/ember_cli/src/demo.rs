//! Built-in demo scene.

use ember_math::Vec3;
use ember_renderer::{Camera, Color, Material, Plane, Scene, Sphere, Triangle};

/// A ground plane, three spheres and a triangular light.
pub fn build_scene(width: u32, height: u32) -> Scene {
    let camera = Camera::new()
        .with_resolution(width, height)
        .with_position(
            Vec3::new(0.0, 1.0, 3.0),  // look_from
            Vec3::new(0.0, 0.3, -1.0), // look_at
            Vec3::Y,                   // vup
        )
        .with_fov(50.0);

    let mut scene = Scene::empty(camera);

    // Ground
    scene.add(Plane::new(Vec3::ZERO, Vec3::Y, Material::diffuse(Color::new(0.5, 0.5, 0.5))));

    scene.add(Sphere::new(
        Vec3::new(-1.1, 0.5, -1.0),
        0.5,
        Material::diffuse(Color::new(0.7, 0.25, 0.2)),
    ));
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.5, -1.2),
        0.5,
        Material::mirror(Color::new(0.8, 0.8, 0.8), 0.95),
    ));
    scene.add(Sphere::new(
        Vec3::new(1.1, 0.5, -1.0),
        0.5,
        Material::diffuse(Color::new(0.2, 0.3, 0.7)),
    ));

    // Light
    scene.add(Triangle::new(
        Vec3::new(-1.0, 2.5, -2.5),
        Vec3::new(1.0, 2.5, -2.5),
        Vec3::new(0.0, 3.2, -1.0),
        Material::emissive(Color::new(6.0, 5.5, 5.0)),
    ));

    log::debug!("Built demo scene with {} objects", scene.len());
    scene
}
