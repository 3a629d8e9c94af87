//! Pointer-to-color mapping and the page that ties it to a tile history.
//!
//! X maps to red, Y to green, and `|x - y|` to blue. Each value is reduced
//! with a truncating `% 255`, so a negative offset can leave a negative
//! residue; such events are dropped without a diagnostic.

use crate::color::{make_color, Rgb};
use crate::history::TileHistory;
use crate::surface::{PreviewSurface, TextSurface, TileContainer};

/// Modulus applied to each pointer-derived channel.
pub const CHANNEL_MODULUS: f64 = 255.0;

/// Truncates `value` and reduces it with a truncating remainder.
///
/// The result keeps the sign of the input, so it lies in `[-254, 254]`.
/// Returns `None` for NaN and infinities.
pub fn reduce_channel(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    // Remainder taken in f64 so huge offsets keep their exact residue.
    Some((value.trunc() % CHANNEL_MODULUS) as i64)
}

/// Reduced `[red, green, blue]` channels for a pointer offset.
pub fn pointer_channels(x: f64, y: f64) -> Option<[i64; 3]> {
    let b = (x - y).abs();
    Some([reduce_channel(x)?, reduce_channel(y)?, reduce_channel(b)?])
}

/// Builds a color from reduced channels, or `None` if any of them is negative.
pub fn color_from_residues([r, g, b]: [i64; 3]) -> Option<Rgb> {
    if r < 0 || g < 0 || b < 0 {
        return None;
    }
    Some(make_color(r, g, b))
}

/// Maps a pointer offset to a color, or `None` if the event should be dropped.
pub fn pointer_to_color(x: f64, y: f64) -> Option<Rgb> {
    pointer_channels(x, y).and_then(color_from_residues)
}

/// A preview surface plus a tile history, driven by pointer-move events.
#[derive(Debug)]
pub struct TilePage<P, L, C> {
    preview: P,
    history: TileHistory<L, C>,
}

impl<P, L, C> TilePage<P, L, C>
where
    P: PreviewSurface,
    L: TextSurface,
    C: TileContainer,
{
    pub fn new(preview: P, history: TileHistory<L, C>) -> Self {
        Self { preview, history }
    }

    /// Handles one pointer-move event at offset `(x, y)`.
    ///
    /// Returns the recorded color, or `None` if the event was dropped.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<Rgb> {
        let color = pointer_to_color(x, y)?;
        self.history.record(color);
        self.preview.set_fill(&color.to_css());
        Some(color)
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn history(&self) -> &TileHistory<L, C> {
        &self.history
    }
}
