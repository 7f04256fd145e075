//! Intersection results and the `GraphicsObject` capability.

use ember_math::Vec3;

use crate::{Material, Ray};

/// Surface data for a ray that struck an object.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter where the intersection occurs (always >= 0)
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> Hit<'a> {
    /// Build a hit, orienting `outward_normal` against the ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: &'a Material) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            point: ray.at(t),
            normal,
            front_face,
            material,
        }
    }
}

/// Outcome of testing a ray against one object or a whole scene.
///
/// A miss carries no distance or surface data.
#[derive(Debug, Clone, Copy, Default)]
pub enum Intersection<'a> {
    #[default]
    Miss,
    Hit(Hit<'a>),
}

impl<'a> Intersection<'a> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Intersection::Hit(_))
    }

    /// Hit distance, if any.
    pub fn distance(&self) -> Option<f32> {
        match self {
            Intersection::Hit(hit) => Some(hit.t),
            Intersection::Miss => None,
        }
    }

    pub fn hit(&self) -> Option<&Hit<'a>> {
        match self {
            Intersection::Hit(hit) => Some(hit),
            Intersection::Miss => None,
        }
    }
}

impl<'a> From<Option<Hit<'a>>> for Intersection<'a> {
    fn from(hit: Option<Hit<'a>>) -> Self {
        hit.map_or(Intersection::Miss, Intersection::Hit)
    }
}

/// Anything that can be intersected by a ray.
pub trait GraphicsObject: Send + Sync {
    /// Test the ray against this object.
    ///
    /// Returns the nearest hit with a positive ray parameter, or `Miss`.
    fn intersect(&self, ray: &Ray) -> Intersection<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_normal_points_against_ray() {
        let material = Material::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let outside = Hit::new(&ray, 1.0, Vec3::Z, &material);
        assert!(outside.front_face);
        assert_eq!(outside.normal, Vec3::Z);
        assert_eq!(outside.point, Vec3::new(0.0, 0.0, -1.0));

        let inside = Hit::new(&ray, 1.0, -Vec3::Z, &material);
        assert!(!inside.front_face);
        assert_eq!(inside.normal, Vec3::Z);
    }

    #[test]
    fn test_miss_has_no_distance() {
        let miss = Intersection::default();
        assert!(!miss.is_hit());
        assert_eq!(miss.distance(), None);
        assert!(miss.hit().is_none());
    }
}
