//! PNG output of a swatch grid.
//!
//! Feature-gated behind `png` (default on). The buffer itself comes from
//! [`crate::pixel`].

use colored_tiles_core::{Rgb, TileError};
use std::path::Path;

use crate::pixel::{history_to_rgba, SwatchLayout};

/// Writes `colors` (newest first) as a PNG swatch grid.
///
/// Returns `TileError::InvalidConfig` if the grid exceeds the size limit,
/// or `TileError::Io` on write failure.
pub fn write_png(colors: &[Rgb], layout: SwatchLayout, path: &Path) -> Result<(), TileError> {
    let img = history_to_rgba(colors, layout)?;
    let w = u32::try_from(img.width)
        .map_err(|_| TileError::InvalidConfig("swatch image too wide".into()))?;
    let h = u32::try_from(img.height)
        .map_err(|_| TileError::InvalidConfig("swatch image too tall".into()))?;
    let buf = image::RgbaImage::from_raw(w, h, img.pixels)
        .ok_or_else(|| TileError::Io("RGBA buffer size mismatch".into()))?;
    buf.save(path).map_err(|e| TileError::Io(e.to_string()))?;
    log::debug!("wrote {} swatches to {}", colors.len(), path.display());
    Ok(())
}
