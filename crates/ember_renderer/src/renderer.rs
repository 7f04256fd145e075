//! Render orchestration.
//!
//! Drives a full render from scene + settings to a finished image:
//! - Validates the camera resolution and tile divider
//! - Allocates zeroed accumulation buffers
//! - Samples tiles one at a time in raster order through a [`RegionSampler`]
//! - Resolves accumulated sums into 8-bit RGBA

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    color_to_rgba, generate_tiles, tile_size, AccumulationBuffer, Region, RenderError,
    RenderResult, RenderedImage, Scene, Tile,
};

/// Settings shared by the orchestrator and the sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Number of tiles along each image axis; tile size is
    /// `ceil(axis / tile_divider)`.
    pub tile_divider: u32,
    /// Apply gamma 2.0 before quantizing to 8 bits
    pub gamma_correct: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            tile_divider: 8,
            gamma_correct: false,
        }
    }
}

/// The per-tile sampling step.
///
/// For every pixel of `region.tile()` an implementation adds one or more
/// contributions through [`Region::add_sample`]. Writes outside the tile
/// are rejected by the region.
pub trait RegionSampler {
    fn sample_region(
        &mut self,
        scene: &Scene,
        settings: &RenderSettings,
        region: &mut Region<'_>,
    ) -> RenderResult<()>;
}

impl<F> RegionSampler for F
where
    F: FnMut(&Scene, &RenderSettings, &mut Region<'_>) -> RenderResult<()>,
{
    fn sample_region(
        &mut self,
        scene: &Scene,
        settings: &RenderSettings,
        region: &mut Region<'_>,
    ) -> RenderResult<()> {
        self(scene, settings, region)
    }
}

/// Notifications emitted during a render.
///
/// Observers only ever see shared references, so they cannot touch the
/// accumulation buffers.
pub trait RenderObserver {
    /// Called once after validation, before any tile is sampled.
    fn on_start(&mut self, _width: u32, _height: u32, _tile_count: usize) {}

    /// Called after each tile has been sampled.
    fn on_progress(&mut self, _tile: &Tile) {}

    /// Called exactly once per successful render, with the finished image.
    fn on_finish(&mut self, _image: &RenderedImage) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RenderObserver for NullObserver {}

/// Tiled renderer driving an injected [`RegionSampler`].
pub struct Renderer<S> {
    sampler: S,
}

impl<S: RegionSampler> Renderer<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Render `scene` to a finished image.
    ///
    /// The reported elapsed time covers the tile loop only, not buffer
    /// allocation or finalization. On any error no image is returned and
    /// `on_finish` is not called.
    pub fn render(
        &mut self,
        scene: &Scene,
        settings: &RenderSettings,
        observer: &mut dyn RenderObserver,
    ) -> RenderResult<RenderedImage> {
        let (width, height) = validate(scene, settings)?;
        let (tile_width, tile_height) = tile_size(width, height, settings.tile_divider);
        let tiles = generate_tiles(width, height, tile_width, tile_height);

        log::info!(
            "Rendering {}x{} in {} tiles of {}x{} ({} objects)",
            width,
            height,
            tiles.len(),
            tile_width,
            tile_height,
            scene.len()
        );
        observer.on_start(width, height, tiles.len());

        let total = Instant::now();
        let mut buffer = AccumulationBuffer::new(width, height);

        let start = Instant::now();
        for tile in &tiles {
            let mut region = buffer.region(*tile);
            self.sampler.sample_region(scene, settings, &mut region)?;
            log::debug!(
                "Tile {} done at ({}, {}), {} pixels",
                tile.index,
                tile.x,
                tile.y,
                tile.pixel_count()
            );
            observer.on_progress(tile);
        }
        let elapsed = start.elapsed();

        let image = finalize(&buffer, settings.gamma_correct, elapsed)?;
        log::info!(
            "Render finished: {:.2?} sampling, {:.2?} total",
            elapsed,
            total.elapsed()
        );

        observer.on_finish(&image);
        Ok(image)
    }
}

/// Reject non-positive resolutions and tile dividers before anything is
/// allocated.
fn validate(scene: &Scene, settings: &RenderSettings) -> RenderResult<(u32, u32)> {
    let (width, height) = (scene.camera.width, scene.camera.height);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }
    if settings.tile_divider == 0 {
        return Err(RenderError::InvalidTileDivider(settings.tile_divider));
    }
    Ok((width, height))
}

/// Resolve every pixel's color sum and sample count into RGBA.
///
/// Each pixel reads only its own cells, so the pass runs in parallel. Fails
/// with [`RenderError::UnsampledPixel`] for the lowest-index pixel that has
/// no samples.
pub fn finalize(
    buffer: &AccumulationBuffer,
    gamma_correct: bool,
    elapsed: Duration,
) -> RenderResult<RenderedImage> {
    let resolved: Option<Vec<[u8; 4]>> = buffer
        .colors()
        .par_iter()
        .zip(buffer.samples().par_iter())
        .map(|(sum, &samples)| sum.mean(samples).map(|c| color_to_rgba(c, gamma_correct)))
        .collect();

    let Some(pixels) = resolved else {
        // The parallel collect stops at any gap; report the first one
        let i = buffer
            .samples()
            .par_iter()
            .position_first(|&n| n == 0)
            .unwrap_or_default();
        let (x, y) = buffer.coords(i);
        log::warn!("Pixel ({}, {}) was never sampled", x, y);
        return Err(RenderError::UnsampledPixel { x, y });
    };

    Ok(RenderedImage {
        width: buffer.width(),
        height: buffer.height(),
        pixels,
        elapsed,
    })
}
