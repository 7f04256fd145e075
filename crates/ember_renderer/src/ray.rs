//! Ray type and nearest-hit resolution against a scene.

use ember_math::Vec3;

use crate::{Intersection, Scene};

/// A half-line with an origin and a direction.
///
/// The direction is not necessarily normalized; primitives handle
/// arbitrary lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Find the closest object this ray strikes in `scene`.
    ///
    /// Objects are tested in list order. A candidate replaces the current
    /// best only if nothing has been hit yet or it is strictly closer, so
    /// objects at equal distance resolve to the earliest one in the list.
    pub fn nearest_hit<'s>(&self, scene: &'s Scene) -> Intersection<'s> {
        let mut best = Intersection::Miss;

        for object in scene.objects() {
            let candidate = object.intersect(self);
            let closer = match (&best, &candidate) {
                (_, Intersection::Miss) => false,
                (Intersection::Miss, Intersection::Hit(_)) => true,
                (Intersection::Hit(current), Intersection::Hit(hit)) => hit.t < current.t,
            };
            if closer {
                best = candidate;
            }
        }

        best
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}
