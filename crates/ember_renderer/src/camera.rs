//! Camera description and primary ray generation.

use ember_math::{Vec2, Vec3};

use crate::Ray;

/// Camera for generating rays into the scene.
///
/// Holds the output resolution plus pinhole projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    pub width: u32,
    pub height: u32,

    // Camera positioning
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,

    /// Vertical field of view in degrees
    pub vfov: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 450,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Precompute the viewport basis used for ray generation.
    pub fn projection(&self) -> Projection {
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (self.width as f32 / self.height.max(1) as f32);

        // Calculate camera basis vectors
        let w = (self.look_from - self.look_at).normalize_or_zero();
        let u = self.vup.cross(w).normalize_or_zero();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        let pixel_delta_u = viewport_u / self.width.max(1) as f32;
        let pixel_delta_v = viewport_v / self.height.max(1) as f32;

        // Upper left corner of the viewport, one unit in front of the eye
        let upper_left = self.look_from - w - viewport_u / 2.0 - viewport_v / 2.0;

        Projection {
            center: self.look_from,
            pixel00_loc: upper_left,
            pixel_delta_u,
            pixel_delta_v,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Cached viewport basis derived from a [`Camera`].
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Projection {
    /// Ray through pixel (x, y) at sub-pixel `offset` in `[0, 1)^2`.
    ///
    /// An offset of (0.5, 0.5) passes through the pixel center.
    pub fn ray_for_pixel(&self, x: u32, y: u32, offset: Vec2) -> Ray {
        let pixel_sample = self.pixel00_loc
            + (x as f32 + offset.x) * self.pixel_delta_u
            + (y as f32 + offset.y) * self.pixel_delta_v;

        Ray::new(self.center, pixel_sample - self.center)
    }
}
