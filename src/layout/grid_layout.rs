//! Grid geometry for the calendar view.
//!
//! Converts grid coordinates (column, row) into content-space frames and
//! z-order for the four decorative element kinds, and answers which elements
//! a host has to materialize for a given rectangle. Column width depends on the
//! live viewport width and is memoized until the viewport size changes.

use std::cell::OnceCell;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{CalviewError, Result};
use crate::geometry::{EdgeInsets, Point, Rect, Size};

/// Height of a divider hairline in pixels
pub const DIVIDER_THICKNESS: f32 = 1.0;

/// Logical shape of the grid, independent of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridShape {
    /// Number of day columns (>= 1)
    pub number_of_columns: u32,
    /// Number of time-slot rows (>= 1); there is one more divider than rows
    pub number_of_rows: u32,
    /// Height of each row in pixels (> 0)
    pub row_height: f32,
    /// Space around the grid body
    pub edge_insets: EdgeInsets,
}

impl GridShape {
    /// Create a validated shape.
    ///
    /// # Errors
    /// Returns `CalviewError::InvalidShape` for zero counts, a non-positive or
    /// non-finite row height, or negative/non-finite insets.
    pub fn new(
        number_of_columns: u32,
        number_of_rows: u32,
        row_height: f32,
        edge_insets: EdgeInsets,
    ) -> Result<Self> {
        let shape = Self {
            number_of_columns,
            number_of_rows,
            row_height,
            edge_insets,
        };
        shape.validate()?;
        Ok(shape)
    }

    fn validate(&self) -> Result<()> {
        if self.number_of_columns == 0 {
            return Err(CalviewError::InvalidShape(
                "number of columns must be at least 1".to_string(),
            ));
        }
        if self.number_of_rows == 0 {
            return Err(CalviewError::InvalidShape(
                "number of rows must be at least 1".to_string(),
            ));
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(CalviewError::InvalidShape(format!(
                "row height must be positive, got {}",
                self.row_height
            )));
        }
        if !self.edge_insets.is_valid() {
            return Err(CalviewError::InvalidShape(format!(
                "edge insets must be non-negative, got {:?}",
                self.edge_insets
            )));
        }
        Ok(())
    }

    /// Column width for a viewport of the given width.
    ///
    /// Degenerate viewports (narrower than the horizontal insets, or
    /// non-finite) clamp to 0 so frames stay finite.
    pub fn column_width_for(&self, viewport_width: f32) -> f32 {
        let available = viewport_width - self.edge_insets.horizontal();
        if !available.is_finite() || available <= 0.0 {
            return 0.0;
        }
        available / self.number_of_columns as f32
    }

    /// Height of the grid body (all rows, no insets)
    pub fn body_height(&self) -> f32 {
        self.row_height * self.number_of_rows as f32
    }
}

/// Decorative grid element, carrying only the index its frame depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementKind {
    /// Full-height column background tile
    Background { column: u32 },
    /// Hairline at the top edge of `row` (`row == number_of_rows` is the closing line)
    Divider { row: u32 },
    /// Column header in the top inset band
    ColumnLabel { column: u32 },
    /// Row label in the left inset band, centered on the divider at `row`
    RowLabel { row: u32 },
}

impl ElementKind {
    /// Stacking order: backgrounds < dividers < column labels < row labels
    pub const fn z_index(self) -> i32 {
        match self {
            ElementKind::Background { .. } => 0,
            ElementKind::Divider { .. } => 1,
            ElementKind::ColumnLabel { .. } => 2,
            ElementKind::RowLabel { .. } => 3,
        }
    }

    /// Kind name as used by string-keyed hosts
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Background { .. } => "background",
            ElementKind::Divider { .. } => "divider",
            ElementKind::ColumnLabel { .. } => "columnLabel",
            ElementKind::RowLabel { .. } => "rowLabel",
        }
    }

    /// Build a kind from a host-provided name and index.
    /// Unknown names yield `None` so the host can skip the element.
    pub fn from_name(name: &str, index: u32) -> Option<Self> {
        match name {
            "background" => Some(ElementKind::Background { column: index }),
            "divider" => Some(ElementKind::Divider { row: index }),
            "columnLabel" => Some(ElementKind::ColumnLabel { column: index }),
            "rowLabel" => Some(ElementKind::RowLabel { row: index }),
            _ => None,
        }
    }
}

/// Frame and stacking order of one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementFrame {
    pub rect: Rect,
    pub z_index: i32,
}

/// Values derived from the shape and the current viewport width
#[derive(Debug, Clone, Copy)]
struct LayoutMetrics {
    column_width: f32,
    content_size: Size,
}

/// Layout engine for the calendar grid
#[derive(Debug, Clone)]
pub struct GridLayout {
    shape: GridShape,
    show_column_labels: bool,
    show_row_labels: bool,
    viewport_bounds: Rect,
    metrics: OnceCell<LayoutMetrics>,
}

impl GridLayout {
    /// Create a layout with a zero-sized viewport; the host pushes real
    /// bounds with [`GridLayout::set_viewport_bounds`].
    ///
    /// # Errors
    /// Returns `CalviewError::InvalidShape` if the shape fails validation.
    pub fn new(shape: GridShape) -> Result<Self> {
        shape.validate()?;
        Ok(Self {
            shape,
            show_column_labels: false,
            show_row_labels: false,
            viewport_bounds: Rect::ZERO,
            metrics: OnceCell::new(),
        })
    }

    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    pub fn number_of_columns(&self) -> u32 {
        self.shape.number_of_columns
    }

    pub fn number_of_rows(&self) -> u32 {
        self.shape.number_of_rows
    }

    pub fn row_height(&self) -> f32 {
        self.shape.row_height
    }

    pub fn edge_insets(&self) -> EdgeInsets {
        self.shape.edge_insets
    }

    pub fn show_column_labels(&self) -> bool {
        self.show_column_labels
    }

    pub fn show_row_labels(&self) -> bool {
        self.show_row_labels
    }

    pub fn set_show_column_labels(&mut self, show: bool) {
        self.show_column_labels = show;
    }

    pub fn set_show_row_labels(&mut self, show: bool) {
        self.show_row_labels = show;
    }

    /// Replace the whole shape, discarding cached metrics.
    ///
    /// # Errors
    /// Returns `CalviewError::InvalidShape` if the shape fails validation;
    /// the layout is left unchanged in that case.
    pub fn set_shape(&mut self, shape: GridShape) -> Result<()> {
        shape.validate()?;
        self.shape = shape;
        self.invalidate();
        Ok(())
    }

    /// Update column and row counts together.
    ///
    /// # Errors
    /// Returns `CalviewError::InvalidShape` if either count is zero; the
    /// layout is left unchanged in that case.
    pub fn set_counts(&mut self, number_of_columns: u32, number_of_rows: u32) -> Result<()> {
        let shape = GridShape::new(
            number_of_columns,
            number_of_rows,
            self.shape.row_height,
            self.shape.edge_insets,
        )?;
        self.set_shape(shape)
    }

    /// Current viewport bounds as last pushed by the host
    pub fn viewport_bounds(&self) -> Rect {
        self.viewport_bounds
    }

    /// Whether moving to `new_bounds` makes previously computed frames stale.
    ///
    /// Only the viewport size feeds the geometry (column width), so
    /// origin-only changes from scrolling do not invalidate.
    pub fn should_invalidate(&self, new_bounds: Rect) -> bool {
        new_bounds.size() != self.viewport_bounds.size()
    }

    /// Record new viewport bounds, dropping cached metrics when they are
    /// stale. Returns whether the layout was invalidated.
    pub fn set_viewport_bounds(&mut self, new_bounds: Rect) -> bool {
        let invalidate = self.should_invalidate(new_bounds);
        if invalidate {
            log::debug!(
                "GridLayout: viewport resized {}x{} -> {}x{}",
                self.viewport_bounds.width,
                self.viewport_bounds.height,
                new_bounds.width,
                new_bounds.height
            );
            self.invalidate();
        }
        self.viewport_bounds = new_bounds;
        invalidate
    }

    /// Discard memoized metrics; they are recomputed on the next query.
    pub fn invalidate(&mut self) {
        self.metrics = OnceCell::new();
    }

    fn metrics(&self) -> &LayoutMetrics {
        self.metrics.get_or_init(|| {
            let shape = &self.shape;
            let column_width = shape.column_width_for(self.viewport_bounds.width);
            if column_width <= 0.0 {
                log::warn!(
                    "GridLayout: viewport width {} leaves no room for {} columns; column width clamped to 0",
                    self.viewport_bounds.width,
                    shape.number_of_columns
                );
            }
            let insets = shape.edge_insets;
            let content_size = Size::new(
                insets.left + column_width * shape.number_of_columns as f32 + insets.right,
                insets.top + shape.body_height() + insets.bottom,
            );
            log::debug!(
                "GridLayout: column width {column_width}, content {}x{}",
                content_size.width,
                content_size.height
            );
            LayoutMetrics {
                column_width,
                content_size,
            }
        })
    }

    /// Width of one column for the current viewport
    pub fn column_width(&self) -> f32 {
        self.metrics().column_width
    }

    /// Total scrollable content size
    pub fn content_size(&self) -> Size {
        self.metrics().content_size
    }

    /// Frame of the grid body (all columns and rows, excluding insets)
    pub fn body_rect(&self) -> Rect {
        let insets = self.shape.edge_insets;
        Rect::new(
            insets.left,
            insets.top,
            self.column_width() * self.shape.number_of_columns as f32,
            self.shape.body_height(),
        )
    }

    /// Frame and z-index of an element.
    pub fn frame(&self, kind: ElementKind) -> ElementFrame {
        let insets = self.shape.edge_insets;
        let column_width = self.column_width();
        let row_height = self.shape.row_height;

        let rect = match kind {
            ElementKind::Background { column } => Rect::new(
                insets.left + column as f32 * column_width,
                insets.top,
                column_width,
                self.shape.body_height(),
            ),
            ElementKind::Divider { row } => Rect::new(
                insets.left,
                insets.top + row as f32 * row_height,
                column_width * self.shape.number_of_columns as f32,
                DIVIDER_THICKNESS,
            ),
            ElementKind::ColumnLabel { column } => Rect::new(
                insets.left + column as f32 * column_width,
                0.0,
                column_width,
                insets.top,
            ),
            // Centered on its divider; row 0 may start above the content origin.
            ElementKind::RowLabel { row } => Rect::new(
                0.0,
                insets.top + row as f32 * row_height - 0.5 * row_height,
                insets.left,
                row_height,
            ),
        };

        ElementFrame {
            rect,
            z_index: kind.z_index(),
        }
    }

    /// Frame lookup for hosts that identify kinds by name.
    /// Unknown kinds return `None`.
    pub fn frame_named(&self, name: &str, index: u32) -> Option<ElementFrame> {
        ElementKind::from_name(name, index).map(|kind| self.frame(kind))
    }

    /// Every element of the grid regardless of position: per column a
    /// background and (optionally) a label, then per divider (rows + 1) a
    /// divider and (optionally) a row label.
    pub fn all_elements(&self) -> Vec<ElementKind> {
        self.collect_elements(0..=self.shape.number_of_rows, |_| true)
    }

    /// Elements whose frame intersects `rect` (closed intervals), in the
    /// same order as [`GridLayout::all_elements`].
    pub fn elements_intersecting(&self, rect: Rect) -> Vec<ElementKind> {
        let rows = self.divider_span(rect);
        let elements = self.collect_elements(rows, |kind| self.frame(kind).rect.intersects(&rect));
        log::trace!(
            "GridLayout: {} elements in ({}, {}, {}x{})",
            elements.len(),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        elements
    }

    /// Elements intersecting `rect` paired with their frames
    pub fn layout_attributes_in(&self, rect: Rect) -> Vec<(ElementKind, ElementFrame)> {
        self.elements_intersecting(rect)
            .into_iter()
            .map(|kind| (kind, self.frame(kind)))
            .collect()
    }

    fn collect_elements(
        &self,
        rows: RangeInclusive<u32>,
        keep: impl Fn(ElementKind) -> bool,
    ) -> Vec<ElementKind> {
        let mut elements = Vec::new();

        for column in 0..self.shape.number_of_columns {
            let background = ElementKind::Background { column };
            if keep(background) {
                elements.push(background);
            }
            if self.show_column_labels {
                let label = ElementKind::ColumnLabel { column };
                if keep(label) {
                    elements.push(label);
                }
            }
        }

        for row in rows {
            let divider = ElementKind::Divider { row };
            if keep(divider) {
                elements.push(divider);
            }
            if self.show_row_labels {
                let label = ElementKind::RowLabel { row };
                if keep(label) {
                    elements.push(label);
                }
            }
        }

        elements
    }

    /// Divider indices whose divider or row label could touch the vertical
    /// extent of `rect`. Conservative on each side; callers still filter by
    /// exact frame.
    ///
    /// Dividers hang `DIVIDER_THICKNESS` below their anchor, which can span
    /// several rows when rows are thinner than the hairline.
    fn divider_span(&self, rect: Rect) -> RangeInclusive<u32> {
        let top = self.shape.edge_insets.top;
        let row_height = self.shape.row_height;
        let last = self.shape.number_of_rows;
        let below = row_height.max(DIVIDER_THICKNESS) + row_height;

        let first = index_at(rect.y - top - below, row_height, last);
        let end = index_at(rect.max_y() - top + row_height, row_height, last);
        first.unwrap_or(0)..=end.unwrap_or(last)
    }

    /// Column containing content x, if x lies within the grid body
    pub fn column_at_x(&self, x: f32) -> Option<u32> {
        let left = self.shape.edge_insets.left;
        let column_width = self.column_width();
        let right = left + column_width * self.shape.number_of_columns as f32;
        if column_width <= 0.0 || x < left || x >= right {
            return None;
        }
        index_at(x - left, column_width, self.shape.number_of_columns - 1)
    }

    /// Row containing content y, if y lies within the grid body
    pub fn row_at_y(&self, y: f32) -> Option<u32> {
        let top = self.shape.edge_insets.top;
        if y < top || y >= top + self.shape.body_height() {
            return None;
        }
        index_at(y - top, self.shape.row_height, self.shape.number_of_rows - 1)
    }

    /// (column, row) slot under a content-space point
    pub fn slot_at(&self, point: Point) -> Option<(u32, u32)> {
        Some((self.column_at_x(point.x)?, self.row_at_y(point.y)?))
    }
}

/// `floor(offset / step)` clamped to `0..=max`. Returns `None` for
/// non-finite input.
/// The cast is safe because the value is clamped to [0, max] first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn index_at(offset: f32, step: f32, max: u32) -> Option<u32> {
    let index = (offset / step).floor();
    if !index.is_finite() {
        return None;
    }
    Some(index.clamp(0.0, max as f32) as u32)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn week_layout(viewport_width: f32) -> GridLayout {
        let shape = GridShape::new(7, 48, 40.0, EdgeInsets::new(40.0, 60.0, 20.0, 20.0)).unwrap();
        let mut layout = GridLayout::new(shape).unwrap();
        layout.set_show_column_labels(true);
        layout.set_show_row_labels(true);
        layout.set_viewport_bounds(Rect::new(0.0, 0.0, viewport_width, 600.0));
        layout
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_shape_rejects_zero_counts() {
        let insets = EdgeInsets::default();
        assert!(GridShape::new(0, 10, 40.0, insets).is_err());
        assert!(GridShape::new(7, 0, 40.0, insets).is_err());
        assert!(GridShape::new(7, 10, 0.0, insets).is_err());
        assert!(GridShape::new(7, 10, f32::INFINITY, insets).is_err());
    }

    #[test]
    fn test_column_width_from_viewport() {
        let layout = week_layout(760.0);
        assert!(approx(layout.column_width(), 97.142_86));
    }

    #[test]
    fn test_degenerate_viewport_clamps_column_width() {
        let layout = week_layout(50.0);
        assert_eq!(layout.column_width(), 0.0);
        assert_eq!(layout.content_size().width, 80.0);

        let shape = GridShape::new(7, 48, 40.0, EdgeInsets::default()).unwrap();
        let layout = GridLayout::new(shape).unwrap();
        assert_eq!(layout.column_width(), 0.0);
    }

    #[test]
    fn test_content_size() {
        let layout = week_layout(760.0);
        let size = layout.content_size();
        assert!(approx(size.width, 760.0));
        assert_eq!(size.height, 40.0 + 40.0 * 48.0 + 20.0);
        assert_eq!(layout.content_size(), size);
    }

    #[test]
    fn test_frames_per_kind() {
        let layout = week_layout(760.0);
        let w = layout.column_width();

        let bg = layout.frame(ElementKind::Background { column: 2 });
        assert!(approx(bg.rect.x, 60.0 + 2.0 * w));
        assert_eq!(bg.rect.y, 40.0);
        assert_eq!(bg.rect.height, 40.0 * 48.0);

        let divider = layout.frame(ElementKind::Divider { row: 3 });
        assert_eq!(divider.rect.x, 60.0);
        assert_eq!(divider.rect.y, 40.0 + 3.0 * 40.0);
        assert!(approx(divider.rect.width, 680.0));
        assert_eq!(divider.rect.height, 1.0);

        let column_label = layout.frame(ElementKind::ColumnLabel { column: 6 });
        assert_eq!(column_label.rect.y, 0.0);
        assert_eq!(column_label.rect.height, 40.0);

        let row_label = layout.frame(ElementKind::RowLabel { row: 0 });
        assert_eq!(row_label.rect.x, 0.0);
        assert_eq!(row_label.rect.y, 20.0);
        assert_eq!(row_label.rect.width, 60.0);
        assert_eq!(row_label.rect.height, 40.0);
    }

    #[test]
    fn test_row_label_above_origin_without_top_inset() {
        let shape = GridShape::new(1, 4, 40.0, EdgeInsets::new(0.0, 60.0, 0.0, 0.0)).unwrap();
        let layout = GridLayout::new(shape).unwrap();
        let frame = layout.frame(ElementKind::RowLabel { row: 0 });
        assert_eq!(frame.rect.y, -20.0);
    }

    #[test]
    fn test_z_order() {
        let layout = week_layout(760.0);
        let z = |kind| layout.frame(kind).z_index;
        assert_eq!(z(ElementKind::Background { column: 0 }), 0);
        assert_eq!(z(ElementKind::Divider { row: 0 }), 1);
        assert_eq!(z(ElementKind::ColumnLabel { column: 0 }), 2);
        assert_eq!(z(ElementKind::RowLabel { row: 0 }), 3);
    }

    #[test]
    fn test_frame_named_unknown_kind() {
        let layout = week_layout(760.0);
        assert!(layout.frame_named("cell", 0).is_none());
        assert_eq!(
            layout.frame_named("divider", 4),
            Some(layout.frame(ElementKind::Divider { row: 4 }))
        );
    }

    #[test]
    fn test_all_elements_count() {
        let layout = week_layout(760.0);
        assert_eq!(layout.all_elements().len(), 7 + 7 + 49 + 49);
    }

    #[test]
    fn test_full_content_query_matches_all_elements() {
        let layout = week_layout(760.0);
        let full = Rect::from_size(layout.content_size());
        assert_eq!(layout.elements_intersecting(full), layout.all_elements());
    }

    #[test]
    fn test_partial_query_culls_rows() {
        let layout = week_layout(760.0);
        // Body rows 10..=14 only, no label bands
        let rect = Rect::new(100.0, 40.0 + 10.0 * 40.0 + 5.0, 200.0, 150.0);
        let elements = layout.elements_intersecting(rect);

        assert!(!elements.contains(&ElementKind::Divider { row: 0 }));
        assert!(elements.contains(&ElementKind::Divider { row: 11 }));
        assert!(!elements.contains(&ElementKind::ColumnLabel { column: 0 }));
        // Row labels live in the left inset, outside the query
        assert!(!elements.iter().any(|k| matches!(k, ElementKind::RowLabel { .. })));
        for kind in &elements {
            assert!(layout.frame(*kind).rect.intersects(&rect));
        }
        assert!(elements.len() < layout.all_elements().len());
    }

    #[test]
    fn test_hidden_labels_are_not_enumerated() {
        let mut layout = week_layout(760.0);
        layout.set_show_column_labels(false);
        layout.set_show_row_labels(false);
        assert_eq!(layout.all_elements().len(), 7 + 49);
    }

    #[test]
    fn test_invalidation_on_resize_only() {
        let mut layout = week_layout(760.0);
        let before = layout.column_width();

        let scrolled = Rect::new(0.0, 300.0, 760.0, 600.0);
        assert!(!layout.should_invalidate(scrolled));
        assert!(!layout.set_viewport_bounds(scrolled));
        assert_eq!(layout.column_width(), before);

        let wider = Rect::new(0.0, 300.0, 1000.0, 600.0);
        assert!(layout.should_invalidate(wider));
        assert!(layout.set_viewport_bounds(wider));
        assert!(!layout.should_invalidate(wider));
        assert!(approx(layout.column_width(), 131.428_57));
    }

    #[test]
    fn test_set_counts_rejects_zero_and_keeps_shape() {
        let mut layout = week_layout(760.0);
        assert!(layout.set_counts(0, 72).is_err());
        assert_eq!(layout.number_of_columns(), 7);
        layout.set_counts(1, 72).unwrap();
        assert_eq!(layout.number_of_rows(), 72);
        assert!(approx(layout.column_width(), 680.0));
    }

    #[test]
    fn test_hit_testing() {
        let layout = week_layout(760.0);
        let w = layout.column_width();
        assert_eq!(layout.column_at_x(59.0), None);
        assert_eq!(layout.column_at_x(60.0), Some(0));
        assert_eq!(layout.column_at_x(60.0 + 3.5 * w), Some(3));
        assert_eq!(layout.column_at_x(740.0), None);
        assert_eq!(layout.row_at_y(39.0), None);
        assert_eq!(layout.row_at_y(40.0 + 40.0 * 2.5), Some(2));
        assert_eq!(layout.row_at_y(40.0 + 40.0 * 48.0), None);
        assert_eq!(layout.slot_at(Point::new(60.0 + 1.5 * w, 85.0)), Some((1, 1)));
    }
}
