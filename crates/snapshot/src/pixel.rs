//! Pure-computation RGBA buffer for a grid of color swatches.

use colored_tiles_core::{Rgb, TileError};

/// Largest width or height, in pixels, of a swatch image.
pub const MAX_DIMENSION: usize = 16_384;

/// Grid geometry: square tiles of `tile_size` pixels, `columns` per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchLayout {
    tile_size: usize,
    columns: usize,
}

impl SwatchLayout {
    /// Returns `TileError::InvalidConfig` if either value is zero, or if a
    /// full row of tiles would be wider than [`MAX_DIMENSION`].
    pub fn new(tile_size: usize, columns: usize) -> Result<Self, TileError> {
        if tile_size == 0 || columns == 0 {
            return Err(TileError::InvalidConfig(
                "tile size and column count must be non-zero".into(),
            ));
        }
        match tile_size.checked_mul(columns) {
            Some(width) if width <= MAX_DIMENSION => Ok(Self { tile_size, columns }),
            _ => Err(TileError::InvalidConfig(format!(
                "{columns} columns of {tile_size}px tiles exceed the {MAX_DIMENSION}px width limit"
            ))),
        }
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Image size in pixels for `count` tiles. An empty history still gets one cell.
    ///
    /// Returns `TileError::InvalidConfig` if the rows would be taller than
    /// [`MAX_DIMENSION`].
    pub fn dimensions(&self, count: usize) -> Result<(usize, usize), TileError> {
        let cols = count.clamp(1, self.columns);
        let rows = count.div_ceil(self.columns).max(1);
        match rows.checked_mul(self.tile_size) {
            // Width was bounded in `new`.
            Some(height) if height <= MAX_DIMENSION => Ok((cols * self.tile_size, height)),
            _ => Err(TileError::InvalidConfig(format!(
                "{count} tiles need {rows} rows, over the {MAX_DIMENSION}px height limit"
            ))),
        }
    }
}

impl Default for SwatchLayout {
    fn default() -> Self {
        Self {
            tile_size: 32,
            columns: 16,
        }
    }
}

/// An RGBA8 image, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Lays `colors` out row-major, first color in the top-left cell.
///
/// Pass the history newest first to match the page's tile order. Cells past
/// the last color stay transparent. Fails only if the grid is taller than
/// [`MAX_DIMENSION`].
pub fn history_to_rgba(colors: &[Rgb], layout: SwatchLayout) -> Result<SwatchImage, TileError> {
    let (width, height) = layout.dimensions(colors.len())?;
    let mut pixels = vec![0u8; width * height * 4];
    let size = layout.tile_size;

    for (i, &color) in colors.iter().enumerate() {
        let [r, g, b] = <[u8; 3]>::from(color);
        let x0 = (i % layout.columns) * size;
        let y0 = (i / layout.columns) * size;
        for y in y0..y0 + size {
            let row = (y * width + x0) * 4;
            for px in pixels[row..row + size * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, 255]);
            }
        }
    }

    Ok(SwatchImage {
        width,
        height,
        pixels,
    })
}
