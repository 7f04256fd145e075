//! Tile partitioning of the output image.
//!
//! The image is divided into rectangular tiles that are sampled one at a
//! time in raster order: rows of tiles top to bottom, tiles left to right
//! within a row.

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of tile's top-left corner
    pub x: u32,
    /// Y coordinate of tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in render order
    pub index: usize,
}

impl Tile {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether pixel (x, y) falls in `[x, x + width) x [y, y + height)`.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }

    /// Pixels of this tile in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Tile { x, y, width, height, .. } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }

    /// `(x, y, width, height)`
    pub fn rect(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Nominal tile size for an image split by `divider` along each axis:
/// `ceil(width / divider)` by `ceil(height / divider)`.
///
/// `divider` must be positive.
pub fn tile_size(width: u32, height: u32, divider: u32) -> (u32, u32) {
    (width.div_ceil(divider), height.div_ceil(divider))
}

/// Generate tiles covering a `width` x `height` image exactly once, in
/// raster order. Tiles on the right and bottom edges are clamped to the
/// image boundary.
pub fn generate_tiles(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    if tile_width == 0 || tile_height == 0 {
        return tiles;
    }

    let mut y = 0;
    while y < height {
        let th = tile_height.min(height - y);
        let mut x = 0;
        while x < width {
            let tw = tile_width.min(width - x);
            tiles.push(Tile::new(x, y, tw, th, tiles.len()));
            x += tile_width;
        }
        y += tile_height;
    }

    tiles
}
