//! Error types for the colored-tiles core.

use thiserror::Error;

/// Errors produced while building colors, reading configuration, or writing snapshots.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    /// A raw channel value was not an integer in `[0, max]`.
    ///
    /// Always recovered by the color factory, which substitutes 0.
    #[error("wrong color value: expected value in [0, ..., {max}], got: {got}")]
    InvalidChannelValue { got: String, max: u8 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Page configuration was not a JSON object or could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A configured page element could not be found.
    #[error("missing page element: {0}")]
    MissingElement(String),

    /// An I/O error (e.g. writing a snapshot file).
    #[error("I/O error: {0}")]
    Io(String),
}
