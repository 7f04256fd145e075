//! Render failure taxonomy.

use thiserror::Error;

use crate::Tile;

/// Errors that can abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}: both axes must be positive")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid tile divider {0}: must be positive")]
    InvalidTileDivider(u32),

    /// A pixel reached finalization without a single sample.
    #[error("Pixel ({x}, {y}) has no samples at finalization")]
    UnsampledPixel { x: u32, y: u32 },

    /// A sampler tried to write a pixel outside the tile it was handed.
    #[error("Sample at ({x}, {y}) lies outside tile {tile:?}")]
    OutOfRegion { x: u32, y: u32, tile: Tile },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl RenderError {
    /// True for errors caused by bad scene or settings input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RenderError::InvalidResolution { .. } | RenderError::InvalidTileDivider(_)
        )
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
