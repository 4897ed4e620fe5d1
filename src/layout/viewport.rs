//! Viewport state management for scrolling.

use crate::geometry::{Point, Rect, Size};

/// Viewport state - the visible window onto the grid content
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates
    pub scroll_x: f32,
    /// Vertical scroll position in content coordinates
    pub scroll_y: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    /// Create a viewport of the given size scrolled to the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Viewport bounds in content coordinates (origin = scroll offset).
    /// This is what the layout engine receives on every pass.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    /// Convert content coordinates to screen coordinates
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.scroll_x, y - self.scroll_y)
    }

    /// Convert screen coordinates to content coordinates
    pub fn to_content(&self, screen_x: f32, screen_y: f32) -> Point {
        Point::new(screen_x + self.scroll_x, screen_y + self.scroll_y)
    }

    /// Clamp scroll position so the viewport stays within the content.
    ///
    /// Content smaller than the viewport pins the scroll position to 0.
    pub fn clamp_scroll(&mut self, content: Size) {
        let max_x = (content.width - self.width).max(0.0);
        let max_y = (content.height - self.height).max(0.0);

        self.scroll_x = finite_or_zero(self.scroll_x).clamp(0.0, max_x);
        self.scroll_y = finite_or_zero(self.scroll_y).clamp(0.0, max_y);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, content: Size) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(content);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: f32, y: f32, content: Size) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(content);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
