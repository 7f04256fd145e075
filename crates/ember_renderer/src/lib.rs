//! Ember renderer - tiled CPU rendering.
//!
//! A [`Renderer`] splits the image into tiles, hands each tile to a
//! pluggable [`RegionSampler`] that accumulates color samples, and resolves
//! the accumulated sums into an 8-bit RGBA [`RenderedImage`].
//!
//! Samplers find what a ray sees with [`Ray::nearest_hit`], a linear scan
//! over the scene's objects.

mod accumulator;
mod camera;
mod color;
mod error;
mod intersection;
mod material;
mod output;
mod path_tracer;
mod plane;
mod ray;
mod renderer;
mod scene;
mod sphere;
mod tile;
mod triangle;

pub use accumulator::{AccumulationBuffer, Region};
pub use camera::{Camera, Projection};
pub use color::{color_to_rgba, linear_to_gamma, Color, PixelColor};
pub use error::{RenderError, RenderResult};
pub use intersection::{GraphicsObject, Hit, Intersection};
pub use material::Material;
pub use output::RenderedImage;
pub use path_tracer::{PathTracer, PathTracerConfig};
pub use plane::Plane;
pub use ray::Ray;
pub use renderer::{finalize, NullObserver, RegionSampler, RenderObserver, RenderSettings, Renderer};
pub use scene::Scene;
pub use sphere::Sphere;
pub use tile::{generate_tiles, tile_size, Tile};
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from ember_math
pub use ember_math::{Interval, Vec2, Vec3};

/// Ray parameters accepted as hits by the built-in primitives.
pub const HIT_RANGE: Interval = Interval::beyond(1e-4);
