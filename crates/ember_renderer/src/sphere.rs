//! Sphere primitive.

use ember_math::Vec3;

use crate::{GraphicsObject, Hit, Intersection, Material, Ray, HIT_RANGE};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl GraphicsObject for Sphere {
    fn intersect(&self, ray: &Ray) -> Intersection<'_> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        if a == 0.0 || self.radius == 0.0 {
            return Intersection::Miss;
        }
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return Intersection::Miss;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !HIT_RANGE.surrounds(root) {
            root = (h + sqrtd) / a;
            if !HIT_RANGE.surrounds(root) {
                return Intersection::Miss;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Intersection::Hit(Hit::new(ray, root, outward_normal, &self.material))
    }
}
