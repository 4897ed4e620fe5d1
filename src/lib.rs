//! calview - calendar grid layout engine
//!
//! Lays out week and day calendar grids as a scrollable matrix of time slots:
//! - Alternating column backgrounds, hairline dividers, column and row labels
//! - Exact frames and z-order for every element
//! - Visibility queries for a viewport rectangle
//! - Cached geometry invalidated when the viewport is resized
//!
//! Rendering, text layout and input stay with the host; this crate only
//! answers "what is where, and what does it show".
//!
//! # Usage
//!
//! ```
//! use calview::{CalendarMode, CalendarView, GridConfig};
//!
//! let mut view = CalendarView::new(CalendarMode::Week, &GridConfig::default(), 760.0, 600.0)?;
//! assert_eq!(view.layout().number_of_rows(), 48);
//!
//! view.set_mode(CalendarMode::Day)?;
//! for item in view.visible_items() {
//!     let _ = (item.frame.rect, item.content.label);
//! }
//! # Ok::<(), calview::CalviewError>(())
//! ```

pub mod calendar;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use calendar::{CalendarView, RenderItem};
pub use color::{Color, GridPalette};
pub use config::GridConfig;
pub use error::{CalviewError, Result};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use layout::{ElementFrame, ElementKind, GridLayout, GridShape, Viewport};
pub use model::{CalendarMode, ElementContent, GridModel, LabelTrack, ModeConfiguration};
pub use wasm::CalendarGrid;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
