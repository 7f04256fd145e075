//! Per-pixel accumulation buffers and tile-scoped write access.

use rayon::prelude::*;

use crate::{Color, PixelColor, RenderError, RenderResult, Tile};

/// Running color sums and sample counts for every pixel of one render.
///
/// Both vectors hold exactly `width * height` cells and are addressed
/// through [`AccumulationBuffer::index`] only.
#[derive(Debug, Clone)]
pub struct AccumulationBuffer {
    width: u32,
    height: u32,
    colors: Vec<PixelColor>,
    samples: Vec<u32>,
}

impl AccumulationBuffer {
    /// Allocate zeroed buffers for a `width` x `height` image.
    ///
    /// Cells are independent, so initialization is split across threads.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let colors = (0..len).into_par_iter().map(|_| PixelColor::ZERO).collect();
        let samples = (0..len).into_par_iter().map(|_| 0u32).collect();

        Self {
            width,
            height,
            colors,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Buffer index of pixel (x, y): `y * width + x`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel coordinates of buffer index `i`.
    #[inline]
    pub fn coords(&self, i: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((i % width) as u32, (i / width) as u32)
    }

    pub fn colors(&self) -> &[PixelColor] {
        &self.colors
    }

    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    /// Color sum and sample count at pixel (x, y).
    pub fn get(&self, x: u32, y: u32) -> (PixelColor, u32) {
        let i = self.index(x, y);
        (self.colors[i], self.samples[i])
    }

    /// Write access restricted to `tile`.
    ///
    /// Two regions over disjoint tiles never touch the same cell.
    pub fn region(&mut self, tile: Tile) -> Region<'_> {
        Region { buffer: self, tile }
    }

    fn accumulate(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.colors[i] += color;
        self.samples[i] += 1;
    }
}

/// A view of the accumulation buffer that only accepts samples for pixels
/// inside one tile.
pub struct Region<'a> {
    buffer: &'a mut AccumulationBuffer,
    tile: Tile,
}

impl<'a> Region<'a> {
    pub fn tile(&self) -> Tile {
        self.tile
    }

    /// Width of the whole image, not of the tile.
    pub fn image_width(&self) -> u32 {
        self.buffer.width
    }

    /// Pixels of the tile in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        self.tile.pixels()
    }

    /// Add one color contribution to pixel (x, y) and bump its sample count.
    ///
    /// Fails with [`RenderError::OutOfRegion`] without touching the buffers
    /// if the pixel lies outside this region's tile.
    pub fn add_sample(&mut self, x: u32, y: u32, color: Color) -> RenderResult<()> {
        if !self.tile.contains(x, y) {
            log::warn!("Rejected sample at ({}, {}) outside tile {:?}", x, y, self.tile);
            return Err(RenderError::OutOfRegion {
                x,
                y,
                tile: self.tile,
            });
        }
        self.buffer.accumulate(x, y, color);
        Ok(())
    }

    /// Color sum and sample count accumulated so far at pixel (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<(PixelColor, u32)> {
        self.tile.contains(x, y).then(|| self.buffer.get(x, y))
    }
}
