//! Infinite plane primitive.

use ember_math::Vec3;

use crate::{GraphicsObject, Hit, Intersection, Material, Ray, HIT_RANGE};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane. The normal is normalized; a zero normal yields a
    /// plane that nothing intersects.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

impl GraphicsObject for Plane {
    fn intersect(&self, ray: &Ray) -> Intersection<'_> {
        let denom = self.normal.dot(ray.direction());

        // Ray is parallel to the plane (or the plane is degenerate)
        if denom.abs() < 1e-8 {
            return Intersection::Miss;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !HIT_RANGE.surrounds(t) {
            return Intersection::Miss;
        }

        Intersection::Hit(Hit::new(ray, t, self.normal, &self.material))
    }
}
