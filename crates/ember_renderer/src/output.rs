//! Finished 8-bit RGBA images.

use std::path::Path;
use std::time::Duration;

use image::{Rgba, RgbaImage};

use crate::RenderResult;

/// A completed render: RGBA pixels in row-major order, top row first,
/// plus the time spent sampling tiles.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
    pub elapsed: Duration,
}

impl RenderedImage {
    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Raw RGBA bytes, 4 per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| Rgba(self.get(x, y)))
    }

    /// Encode to a file; the format follows the path's extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
