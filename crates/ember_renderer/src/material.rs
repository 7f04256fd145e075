//! Surface description carried by intersections.

use crate::Color;

/// Surface properties of an object.
///
/// The orchestrator never looks inside a material; only samplers do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse/albedo color (RGB, 0-1)
    pub albedo: Color,
    /// Emitted radiance (RGB, for light-emitting surfaces)
    pub emission: Color,
    /// Probability of a mirror bounce instead of a diffuse one (0-1)
    pub reflectivity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Color::new(0.5, 0.5, 0.5), // Grey default
            emission: Color::ZERO,
            reflectivity: 0.0,
        }
    }
}

impl Material {
    /// A matte surface with the given albedo.
    pub fn diffuse(albedo: Color) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    /// A mirror-like surface tinted by `albedo`.
    pub fn mirror(albedo: Color, reflectivity: f32) -> Self {
        Self {
            albedo,
            reflectivity: reflectivity.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// A light source that absorbs everything it does not emit.
    pub fn emissive(emission: Color) -> Self {
        Self {
            albedo: Color::ZERO,
            emission,
            reflectivity: 0.0,
        }
    }
}
