//! Page configuration: which elements the browser front end binds to.

use serde::Serialize;
use serde_json::Value;

use crate::error::TileError;
use crate::params::param_string;

/// Element ids, selectors and class names for the tile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageConfig {
    /// Id of the preview element.
    pub preview_id: String,
    /// Id of the tile history container.
    pub tiles_id: String,
    /// Selector of the current-color label.
    pub current_color_selector: String,
    /// Selector of the "N colors generated" label.
    pub colors_generated_selector: String,
    /// Class that hides the container until the first tile arrives.
    pub hidden_class: String,
    /// Class given to every tile element.
    pub tile_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            preview_id: "preview".into(),
            tiles_id: "tiles".into(),
            current_color_selector: ".current-color".into(),
            colors_generated_selector: ".colors-generated".into(),
            hidden_class: "hidden".into(),
            tile_class: "tile".into(),
        }
    }
}

impl PageConfig {
    /// Reads a configuration object, keeping the default for every missing
    /// or mistyped key.
    ///
    /// Returns `TileError::InvalidConfig` if `params` is not an object.
    pub fn from_params(params: &Value) -> Result<Self, TileError> {
        if !params.is_object() {
            return Err(TileError::InvalidConfig(format!(
                "expected a JSON object, got {params}"
            )));
        }
        let d = Self::default();
        Ok(Self {
            preview_id: param_string(params, "preview_id", &d.preview_id),
            tiles_id: param_string(params, "tiles_id", &d.tiles_id),
            current_color_selector: param_string(
                params,
                "current_color_selector",
                &d.current_color_selector,
            ),
            colors_generated_selector: param_string(
                params,
                "colors_generated_selector",
                &d.colors_generated_selector,
            ),
            hidden_class: param_string(params, "hidden_class", &d.hidden_class),
            tile_class: param_string(params, "tile_class", &d.tile_class),
        })
    }

    /// Parses a JSON string and reads it with [`PageConfig::from_params`].
    pub fn from_json(json: &str) -> Result<Self, TileError> {
        let params: Value =
            serde_json::from_str(json).map_err(|e| TileError::InvalidConfig(e.to_string()))?;
        Self::from_params(&params)
    }
}
