//! Tile history recorder.
//!
//! A [`TileHistory`] owns the recorded colors (newest first) and the three
//! surfaces it renders to: the current-color label, the count label, and the
//! tile container. Nothing is ever evicted.

use std::collections::VecDeque;

use crate::color::Rgb;
use crate::surface::{TextSurface, TileContainer};

/// Text shown in the count label after `count` recordings.
pub fn count_text(count: usize) -> String {
    format!("{count} colors generated")
}

/// Records colors and keeps the attached surfaces in sync.
#[derive(Debug)]
pub struct TileHistory<L, C> {
    current_label: L,
    count_label: L,
    container: C,
    tiles: VecDeque<Rgb>,
}

impl<L: TextSurface, C: TileContainer> TileHistory<L, C> {
    pub fn new(current_label: L, count_label: L, container: C) -> Self {
        Self {
            current_label,
            count_label,
            container,
            tiles: VecDeque::new(),
        }
    }

    /// Prepends `color` and renders it.
    ///
    /// The container is revealed only if it is hidden, so only the first
    /// recording changes its visibility.
    pub fn record(&mut self, color: Rgb) {
        self.tiles.push_front(color);

        if self.container.is_hidden() {
            self.container.reveal();
        }

        let css = color.to_css();
        self.container.prepend_tile(&css);
        self.current_label.set_text(&css);
        self.count_label.set_text(&count_text(self.tiles.len()));
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The most recently recorded color.
    pub fn latest(&self) -> Option<Rgb> {
        self.tiles.front().copied()
    }

    /// Recorded colors, newest first.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.tiles.iter().copied()
    }

    pub fn current_label(&self) -> &L {
        &self.current_label
    }

    pub fn count_label(&self) -> &L {
        &self.count_label
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}
