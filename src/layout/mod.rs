//! Layout engine for computing grid element frames and viewport management.
//!
//! This module handles:
//! - Computing frames and z-order for backgrounds, dividers and labels
//! - Deciding which elements intersect a query rectangle
//! - Memoizing viewport-dependent metrics until the viewport is resized
//! - Scroll state of the host viewport

mod grid_layout;
mod viewport;

pub use grid_layout::{ElementFrame, ElementKind, GridLayout, GridShape, DIVIDER_THICKNESS};
pub use viewport::Viewport;
