#![deny(unsafe_code)]
//! WASM bindings for the colored-tiles pointer toy.
//!
//! `start` binds the page elements, installs the console logger, and attaches
//! a `pointermove` listener to `document.body`. Each event's offsets are fed
//! through [`TilePage::on_pointer_move`](colored_tiles_core::TilePage).

mod dom;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use colored_tiles_core::{make_color as core_make_color, ChannelInput, PageConfig, TileError};
use dom::DomPage;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, PointerEvent};

fn to_js(e: TileError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn channel_input(value: &JsValue) -> ChannelInput {
    if let Some(n) = value.as_f64() {
        ChannelInput::Float(n)
    } else if let Some(s) = value.as_string() {
        ChannelInput::Text(s)
    } else if let Some(b) = value.as_bool() {
        ChannelInput::Bool(b)
    } else if value.is_null() {
        ChannelInput::Null
    } else if value.is_undefined() {
        ChannelInput::Other("undefined".into())
    } else {
        ChannelInput::Other(format!("{value:?}"))
    }
}

/// Validates three JS values into a color and returns its CSS encoding.
///
/// Rejected channels become 0 and are reported on `console.error`.
#[wasm_bindgen(js_name = makeColor)]
pub fn make_color(r: JsValue, g: JsValue, b: JsValue) -> String {
    core_make_color(channel_input(&r), channel_input(&g), channel_input(&b)).to_css()
}

/// A running tile page. Dropping it detaches the pointer listener.
#[wasm_bindgen]
pub struct TilePageHandle {
    page: Rc<RefCell<DomPage>>,
    target: EventTarget,
    listener: Closure<dyn FnMut(PointerEvent)>,
}

#[wasm_bindgen]
impl TilePageHandle {
    /// Number of tiles recorded so far.
    pub fn count(&self) -> usize {
        self.page.borrow().history().len()
    }

    /// CSS encoding of the latest color, if any.
    #[wasm_bindgen(js_name = currentColor)]
    pub fn current_color(&self) -> Option<String> {
        self.page.borrow().history().latest().map(|c| c.to_css())
    }
}

impl Drop for TilePageHandle {
    fn drop(&mut self) {
        let callback = self.listener.as_ref().unchecked_ref();
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("pointermove", callback)
        {
            log::warn!("failed to detach pointer listener: {e:?}");
        }
    }
}

/// Binds the page and starts listening for pointer movement.
///
/// `config_json` optionally overrides element ids, selectors and class
/// names (see `PageConfig`). Fails if the config is malformed or an element
/// is missing.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<TilePageHandle, JsValue> {
    logger::init(LevelFilter::Info);

    let config = match config_json {
        Some(json) => PageConfig::from_json(&json).map_err(to_js)?,
        None => PageConfig::default(),
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| to_js(TileError::MissingElement("document".into())))?;
    let body = document
        .body()
        .ok_or_else(|| to_js(TileError::MissingElement("body".into())))?;

    let page = Rc::new(RefCell::new(dom::bind(&document, &config).map_err(to_js)?));

    let handler_page = Rc::clone(&page);
    let listener = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
        match handler_page.try_borrow_mut() {
            Ok(mut page) => {
                page.on_pointer_move(f64::from(event.offset_x()), f64::from(event.offset_y()));
            }
            Err(_) => log::warn!("pointer event re-entered the tile page; skipped"),
        }
    });

    let target: EventTarget = body.into();
    target.add_event_listener_with_callback("pointermove", listener.as_ref().unchecked_ref())?;
    log::info!("colored tiles listening on document.body");

    Ok(TilePageHandle {
        page,
        target,
        listener,
    })
}

