//! DOM-backed output surfaces.
//!
//! Each surface wraps the element it renders to. DOM calls that fail are
//! logged as warnings; the pointer path itself never fails.

use colored_tiles_core::history::TileHistory;
use colored_tiles_core::{
    PageConfig, PreviewSurface, TextSurface, TileContainer, TileError, TilePage,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// The page type the browser front end drives.
pub type DomPage = TilePage<ElementPreview, ElementText, ElementContainer>;

/// A label whose text content follows the recorder.
pub struct ElementText(Element);

impl TextSurface for ElementText {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// The preview element; its background color follows the latest color.
pub struct ElementPreview(HtmlElement);

impl PreviewSurface for ElementPreview {
    fn set_fill(&mut self, css: &str) {
        if let Err(e) = self.0.style().set_property("background-color", css) {
            log::warn!("failed to set preview color: {e:?}");
        }
    }
}

/// The tile history container.
pub struct ElementContainer {
    element: Element,
    document: Document,
    hidden_class: String,
    tile_class: String,
}

impl ElementContainer {
    fn create_tile(&self, css: &str) -> Result<(), JsValue> {
        let tile: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        tile.class_list().add_1(&self.tile_class)?;
        tile.style().set_property("background-color", css)?;
        self.element.insert_adjacent_element("afterbegin", &tile)?;
        Ok(())
    }
}

impl TileContainer for ElementContainer {
    fn is_hidden(&self) -> bool {
        self.element.class_list().contains(&self.hidden_class)
    }

    fn reveal(&mut self) {
        if let Err(e) = self.element.class_list().remove_1(&self.hidden_class) {
            log::warn!("failed to reveal tile container: {e:?}");
        }
    }

    fn prepend_tile(&mut self, css: &str) {
        if let Err(e) = self.create_tile(css) {
            log::warn!("failed to insert tile {css}: {e:?}");
        }
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, TileError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| TileError::MissingElement(format!("#{id}")))
}

fn by_selector(document: &Document, selector: &str) -> Result<Element, TileError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| TileError::MissingElement(selector.to_owned()))
}

/// Looks up every element named by `config` and builds the page.
pub fn bind(document: &Document, config: &PageConfig) -> Result<DomPage, TileError> {
    let preview = by_id(document, &config.preview_id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| {
            TileError::MissingElement(format!("#{} (not an HTML element)", config.preview_id))
        })?;
    let current = by_selector(document, &config.current_color_selector)?;
    let count = by_selector(document, &config.colors_generated_selector)?;
    let container = ElementContainer {
        element: by_id(document, &config.tiles_id)?,
        document: document.clone(),
        hidden_class: config.hidden_class.clone(),
        tile_class: config.tile_class.clone(),
    };

    Ok(TilePage::new(
        ElementPreview(preview),
        TileHistory::new(ElementText(current), ElementText(count), container),
    ))
}
