//! WASM-exported wrapper around [`CalendarView`] for JavaScript hosts.
//!
//! The host owns the canvas, text rendering and input; it pushes viewport
//! size and scroll changes in, and pulls render items out:
//!
//! ```javascript
//! import init, { CalendarGrid } from 'calview';
//! await init();
//! const grid = new CalendarGrid('week', canvas.width, canvas.height);
//! for (const item of grid.visible_items()) { draw(item); }
//! ```

use std::fmt::Display;

use wasm_bindgen::prelude::*;

use crate::calendar::CalendarView;
use crate::config::GridConfig;
use crate::model::CalendarMode;

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Calendar grid handle exposed to JavaScript
#[wasm_bindgen]
pub struct CalendarGrid {
    view: CalendarView,
}

#[wasm_bindgen]
impl CalendarGrid {
    /// Create a grid with the default appearance.
    ///
    /// # Errors
    /// Returns an error if `mode` is not "week" or "day".
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, width: f32, height: f32) -> Result<CalendarGrid, JsValue> {
        Self::with_config(mode, "{}", width, height)
    }

    /// Create a grid from a JSON config (see `GridConfig`).
    ///
    /// # Errors
    /// Returns an error for an unknown mode or an invalid config.
    pub fn with_config(
        mode: &str,
        config_json: &str,
        width: f32,
        height: f32,
    ) -> Result<CalendarGrid, JsValue> {
        console_error_panic_hook::set_once();
        let mode: CalendarMode = mode.parse().map_err(js_error)?;
        let config = GridConfig::from_json(config_json).map_err(js_error)?;
        let view = CalendarView::new(mode, &config, width, height).map_err(js_error)?;
        Ok(CalendarGrid { view })
    }

    /// Switch between "week" and "day".
    ///
    /// # Errors
    /// Returns an error for an unknown mode; the grid is left unchanged.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: CalendarMode = mode.parse().map_err(js_error)?;
        self.view.set_mode(mode).map_err(js_error)
    }

    pub fn mode(&self) -> String {
        self.view.mode().to_string()
    }

    /// Resize the viewport; returns whether cached layout was discarded.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.view.resize(width, height)
    }

    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        self.view.scroll_by(delta_x, delta_y);
    }

    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.view.set_scroll(x, y);
    }

    pub fn scroll_x(&self) -> f32 {
        self.view.viewport().scroll_x
    }

    pub fn scroll_y(&self) -> f32 {
        self.view.viewport().scroll_y
    }

    pub fn content_width(&self) -> f32 {
        self.view.content_size().width
    }

    pub fn content_height(&self) -> f32 {
        self.view.content_size().height
    }

    pub fn column_width(&self) -> f32 {
        self.view.layout().column_width()
    }

    /// Render items for the current viewport as JS objects.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn visible_items(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.view.visible_items()).map_err(js_error)
    }

    /// Render items for the current viewport as a JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn visible_items_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.view.visible_items()).map_err(js_error)
    }

    /// Frame of a named element kind; `null` for unknown kinds.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn frame(&self, kind: &str, index: u32) -> Result<JsValue, JsValue> {
        match self.view.layout().frame_named(kind, index) {
            Some(frame) => serde_wasm_bindgen::to_value(&frame).map_err(js_error),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn column_label(&self, column: u32) -> Option<String> {
        self.view.model().column_label(column).map(str::to_string)
    }

    pub fn row_label(&self, row: u32) -> Option<String> {
        self.view.model().row_label(row).map(str::to_string)
    }

    /// Column background as a CSS hex string
    pub fn fill_color(&self, column: u32) -> String {
        self.view.model().fill_color(column).to_hex()
    }

    /// Select the column under a screen point; returns the column index.
    pub fn select_at(&mut self, screen_x: f32, screen_y: f32) -> Option<u32> {
        self.view
            .select_at(screen_x, screen_y)
            .map(|(column, _)| column)
    }
}
