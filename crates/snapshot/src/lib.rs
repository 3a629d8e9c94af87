#![deny(unsafe_code)]
//! Swatch-grid rendering of a tile history.
//!
//! [`pixel`] converts a newest-first list of colors into an RGBA8 buffer and
//! is always available. [`snapshot`] writes that buffer as a PNG and is gated
//! behind the `png` feature (default on).

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{history_to_rgba, SwatchImage, SwatchLayout, MAX_DIMENSION};
