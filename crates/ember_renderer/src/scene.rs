//! The world being rendered: a camera and an ordered list of objects.

use crate::{Camera, GraphicsObject, Intersection, Ray};

/// A camera plus an ordered collection of intersectable objects.
///
/// Object order is stable; it only matters for hits at equal distance.
pub struct Scene {
    pub camera: Camera,
    objects: Vec<Box<dyn GraphicsObject>>,
}

impl Scene {
    pub fn new(camera: Camera, objects: Vec<Box<dyn GraphicsObject>>) -> Self {
        Self { camera, objects }
    }

    /// Create a scene with no objects.
    pub fn empty(camera: Camera) -> Self {
        Self::new(camera, Vec::new())
    }

    /// Append an object to the end of the list.
    pub fn add(&mut self, object: impl GraphicsObject + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn objects(&self) -> &[Box<dyn GraphicsObject>] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Shorthand for [`Ray::nearest_hit`].
    pub fn intersect(&self, ray: &Ray) -> Intersection<'_> {
        ray.nearest_hit(self)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("camera", &self.camera)
            .field("objects", &self.objects.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Plane, Sphere};
    use ember_math::Vec3;

    #[test]
    fn test_add_and_intersect() {
        let mut scene = Scene::empty(Camera::new());
        assert!(scene.is_empty());

        scene.add(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Material::default()));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, Material::default()));
        assert_eq!(scene.len(), 2);

        // The sphere sits in front of the ground along this ray
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.1, -1.0));
        let t = scene.intersect(&ray).distance().expect("should hit");
        assert!(t < 10.0);
    }
}
