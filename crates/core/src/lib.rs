#![deny(unsafe_code)]
//! Core types for the colored-tiles pointer toy.
//!
//! Provides the `Rgb` value object and its channel validator, the
//! `TileHistory` recorder, pointer-to-color mapping (`TilePage`), the output
//! surface traits, page configuration, and the `TileError` type.

pub mod color;
pub mod config;
pub mod error;
pub mod history;
pub mod params;
pub mod pointer;
pub mod surface;

pub use color::{make_color, ChannelInput, Rgb};
pub use config::PageConfig;
pub use error::TileError;
pub use history::TileHistory;
pub use pointer::TilePage;
pub use surface::{PreviewSurface, TextSurface, TileContainer};
