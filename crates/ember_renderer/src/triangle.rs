//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use ember_math::Vec3;

use crate::{GraphicsObject, Hit, Intersection, Material, Ray, HIT_RANGE};

/// A single triangle with a flat face normal.
#[derive(Debug, Clone)]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, or zero when degenerate)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices (counter-clockwise front).
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl GraphicsObject for Triangle {
    fn intersect(&self, ray: &Ray) -> Intersection<'_> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle, or the triangle has no area
        if a.abs() < 1e-8 || self.normal == Vec3::ZERO {
            return Intersection::Miss;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return Intersection::Miss;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return Intersection::Miss;
        }

        let t = f * edge2.dot(q);
        if !HIT_RANGE.surrounds(t) {
            return Intersection::Miss;
        }

        Intersection::Hit(Hit::new(ray, t, self.normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facing_camera() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, -2.0),
            Vec3::new(1.0, -1.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            Material::default(),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let triangle = facing_camera();
        let hit = *triangle.intersect(&ray).hit().expect("should hit");
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert!(hit.front_face);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!facing_camera().intersect(&ray).is_hit());
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::X);
        assert!(!facing_camera().intersect(&ray).is_hit());
    }

    #[test]
    fn test_degenerate_triangle_misses() {
        let line = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Material::default());
        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), -Vec3::Z);

        assert_eq!(line.normal(), Vec3::ZERO);
        assert!(!line.intersect(&ray).is_hit());
    }
}
