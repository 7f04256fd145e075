//! Monte Carlo path tracing region sampler.
//!
//! Implements [`RegionSampler`] with:
//! - Jittered primary rays (anti-aliasing via multi-sampling)
//! - Recursive bounces up to a configurable depth
//! - Diffuse and mirror scattering driven by [`Material`]
//!
//! Each tile gets its own RNG seeded from the config seed and the tile
//! index, so a render is reproducible for a fixed seed.

use ember_math::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    Color, Intersection, Material, Ray, Region, RegionSampler, RenderResult, RenderSettings, Scene,
};

/// Path tracer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathTracerConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Whether to use sky gradient instead of solid background
    pub use_sky_gradient: bool,
    /// Base seed for the per-tile random streams
    pub seed: u64,
}

impl Default for PathTracerConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 16,
            max_depth: 8,
            background: Color::ZERO,
            use_sky_gradient: true,
            seed: 0,
        }
    }
}

/// Region sampler that path traces every pixel of a tile.
#[derive(Debug, Clone, Default)]
pub struct PathTracer {
    config: PathTracerConfig,
}

impl PathTracer {
    pub fn new(config: PathTracerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathTracerConfig {
        &self.config
    }

    /// Compute the color seen by a ray.
    pub fn ray_color(&self, scene: &Scene, ray: &Ray, depth: u32, rng: &mut StdRng) -> Color {
        // Past max depth no more light is gathered
        if depth == 0 {
            return Color::ZERO;
        }

        let hit = match ray.nearest_hit(scene) {
            Intersection::Hit(hit) => hit,
            Intersection::Miss => return self.background(ray),
        };

        let material: &Material = hit.material;
        if material.albedo == Color::ZERO {
            return material.emission;
        }

        let direction = if rng.gen::<f32>() < material.reflectivity {
            reflect(ray.direction().normalize_or_zero(), hit.normal)
        } else {
            let scatter = hit.normal + random_unit_vector(rng);
            // Catch degenerate scatter direction
            if scatter.length_squared() < 1e-8 {
                hit.normal
            } else {
                scatter
            }
        };

        let scattered = Ray::new(hit.point, direction);
        material.emission + material.albedo * self.ray_color(scene, &scattered, depth - 1, rng)
    }

    fn background(&self, ray: &Ray) -> Color {
        if self.config.use_sky_gradient {
            sky_gradient(ray)
        } else {
            self.config.background
        }
    }

    fn tile_rng(&self, tile_index: usize) -> StdRng {
        let stream = (tile_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(self.config.seed ^ stream)
    }
}

impl RegionSampler for PathTracer {
    fn sample_region(
        &mut self,
        scene: &Scene,
        _settings: &RenderSettings,
        region: &mut Region<'_>,
    ) -> RenderResult<()> {
        let tile = region.tile();
        let projection = scene.camera.projection();
        let mut rng = self.tile_rng(tile.index);

        for (x, y) in tile.pixels() {
            for _ in 0..self.config.samples_per_pixel {
                let offset = Vec2::new(rng.gen(), rng.gen());
                let ray = projection.ray_for_pixel(x, y, offset);
                let color = self.ray_color(scene, &ray, self.config.max_depth, &mut rng);
                region.add_sample(x, y, color)?;
            }
        }

        Ok(())
    }
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize_or_zero();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Generate a random unit vector on the unit sphere.
fn random_unit_vector(rng: &mut StdRng) -> Vec3 {
    // Rejection sampling for a uniform distribution on the sphere
    loop {
        let v = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, NullObserver, Renderer, Sphere};

    fn config(samples_per_pixel: u32) -> PathTracerConfig {
        PathTracerConfig {
            samples_per_pixel,
            max_depth: 4,
            background: Color::ZERO,
            use_sky_gradient: false,
            seed: 7,
        }
    }

    #[test]
    fn test_sky_gradient() {
        let up = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::Y));
        let down = sky_gradient(&Ray::new(Vec3::ZERO, -Vec3::Y));

        // blue = (0.5, 0.7, 1.0), white = (1.0, 1.0, 1.0)
        assert!(up.x < down.x);
        assert_eq!(down, Color::ONE);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::empty(Camera::new().with_resolution(2, 2));
        let tracer = PathTracer::new(PathTracerConfig {
            background: Color::new(0.2, 0.4, 0.6),
            ..config(1)
        });
        let mut rng = StdRng::seed_from_u64(1);

        let color = tracer.ray_color(&scene, &Ray::default(), 4, &mut rng);
        assert_eq!(color, Color::new(0.2, 0.4, 0.6));
        assert_eq!(tracer.ray_color(&scene, &Ray::default(), 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_enclosed_in_light() {
        // Camera sits inside an emissive sphere: every sample sees the light
        let mut scene = Scene::empty(Camera::new().with_resolution(6, 4));
        scene.add(Sphere::new(
            Vec3::ZERO,
            10.0,
            Material::emissive(Color::new(0.5, 0.25, 1.0)),
        ));

        let mut renderer = Renderer::new(PathTracer::new(config(3)));
        let image = renderer
            .render(&scene, &RenderSettings::default(), &mut NullObserver)
            .unwrap();

        assert!(image.pixels.iter().all(|p| *p == [128, 64, 255, 255]));
    }

    #[test]
    fn test_zero_samples_leaves_pixels_unsampled() {
        let scene = Scene::empty(Camera::new().with_resolution(2, 2));
        let mut renderer = Renderer::new(PathTracer::new(config(0)));

        let err = renderer
            .render(&scene, &RenderSettings::default(), &mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, crate::RenderError::UnsampledPixel { x: 0, y: 0 }));
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let mut scene = Scene::empty(Camera::new().with_resolution(16, 12));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.7, Material::diffuse(Color::splat(0.6))));
        scene.add(Sphere::new(Vec3::new(0.0, -100.7, -2.0), 100.0, Material::mirror(Color::splat(0.8), 0.5)));
        let settings = RenderSettings {
            tile_divider: 3,
            ..Default::default()
        };

        let render = || {
            let mut renderer = Renderer::new(PathTracer::new(PathTracerConfig {
                use_sky_gradient: true,
                ..config(4)
            }));
            renderer.render(&scene, &settings, &mut NullObserver).unwrap()
        };

        let first = render();
        let second = render();
        assert_eq!(first.pixels, second.pixels);
    }
}
