//! Output surfaces the tile history and page are wired to.
//!
//! The browser front end implements these over DOM elements; the in-memory
//! implementations below back tests and the headless CLI.

/// A text label, e.g. the "current color" or "colors generated" display.
pub trait TextSurface {
    fn set_text(&mut self, text: &str);
}

/// The large preview area whose fill follows the latest color.
pub trait PreviewSurface {
    fn set_fill(&mut self, css: &str);
}

/// The container that accumulates one tile per recorded color, newest first.
pub trait TileContainer {
    /// Whether the container is currently hidden.
    fn is_hidden(&self) -> bool;

    /// Makes the container visible.
    fn reveal(&mut self);

    /// Inserts a tile filled with `css` as the first child.
    fn prepend_tile(&mut self, css: &str);
}

/// A text label held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryText {
    text: String,
}

impl MemoryText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextSurface for MemoryText {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

/// A preview fill held in memory. `None` until the first color arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreview {
    fill: Option<String>,
}

impl MemoryPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }
}

impl PreviewSurface for MemoryPreview {
    fn set_fill(&mut self, css: &str) {
        self.fill = Some(css.to_owned());
    }
}

/// A tile container held in memory.
///
/// Starts hidden and counts how many times it was revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryContainer {
    hidden: bool,
    reveals: usize,
    tiles: Vec<String>,
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self {
            hidden: true,
            reveals: 0,
            tiles: Vec::new(),
        }
    }
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `reveal` calls received.
    pub fn reveals(&self) -> usize {
        self.reveals
    }

    /// Tile fills, first child first (newest first).
    pub fn tiles(&self) -> impl Iterator<Item = &str> {
        self.tiles.iter().rev().map(String::as_str)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

impl TileContainer for MemoryContainer {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn reveal(&mut self) {
        self.hidden = false;
        self.reveals += 1;
    }

    fn prepend_tile(&mut self, css: &str) {
        // Stored oldest first; `tiles()` reverses.
        self.tiles.push(css.to_owned());
    }
}
