//! Calendar view - the entry point hosts drive.
//!
//! Owns one `GridModel` (labels, colors) and one `GridLayout` (geometry) and
//! keeps them consistent:
//! - Mode switches replace counts, label tracks and label visibility together
//! - Viewport resizes and scrolls are forwarded as layout bounds
//! - Render queries pair each visible element's frame with its content

use serde::Serialize;

use crate::config::GridConfig;
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::layout::{ElementFrame, ElementKind, GridLayout, GridShape, Viewport};
use crate::model::{CalendarMode, ElementContent, GridModel, ModeConfiguration};

/// One drawable element: what it is, where it goes, what it shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub element: ElementKind,
    pub frame: ElementFrame,
    pub content: ElementContent,
}

/// A calendar grid in week or day mode
#[derive(Debug, Clone)]
pub struct CalendarView {
    mode: CalendarMode,
    model: GridModel,
    layout: GridLayout,
    viewport: Viewport,
    selected_column: Option<u32>,
}

impl CalendarView {
    /// Create a view in `mode` with the given appearance and viewport size.
    ///
    /// # Errors
    /// Returns an error if the config has a non-positive row height or
    /// negative insets.
    pub fn new(mode: CalendarMode, config: &GridConfig, width: f32, height: f32) -> Result<Self> {
        config.validate()?;
        // Placeholder counts; the mode's configuration replaces them below.
        let shape = GridShape::new(1, 1, config.row_height, config.edge_insets)?;

        let mut view = Self {
            mode,
            model: GridModel::new(config.palette.clone()),
            layout: GridLayout::new(shape)?,
            viewport: Viewport::new(width, height),
            selected_column: None,
        };
        view.apply_configuration(mode.configuration())?;
        Ok(view)
    }

    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Switch between week and day grids.
    ///
    /// # Errors
    /// Propagates shape validation errors; on error nothing is changed.
    pub fn set_mode(&mut self, mode: CalendarMode) -> Result<()> {
        log::debug!("CalendarView: mode {} -> {}", self.mode, mode);
        self.apply_configuration(mode.configuration())?;
        self.mode = mode;
        Ok(())
    }

    /// Apply counts, tracks and label visibility as one transition.
    ///
    /// The only fallible step runs first, so a failure leaves the previous
    /// configuration intact.
    fn apply_configuration(&mut self, configuration: ModeConfiguration) -> Result<()> {
        let ModeConfiguration {
            number_of_columns,
            number_of_rows,
            column_labels,
            row_labels,
        } = configuration;

        let shape = GridShape::new(
            number_of_columns,
            number_of_rows,
            self.layout.row_height(),
            self.layout.edge_insets(),
        )?;
        self.layout.set_shape(shape)?;
        self.layout.set_show_column_labels(column_labels.is_some());
        self.layout.set_show_row_labels(row_labels.is_some());
        self.model.set_tracks(column_labels, row_labels);

        if self.selected_column.is_some_and(|c| c >= number_of_columns) {
            self.selected_column = None;
        }

        log::debug!(
            "CalendarView: applied {number_of_columns} columns x {number_of_rows} rows"
        );
        self.sync_viewport();
        Ok(())
    }

    /// Change row height, insets and palette, keeping the current mode.
    ///
    /// # Errors
    /// Returns an error if the config fails validation; nothing is changed.
    pub fn set_config(&mut self, config: &GridConfig) -> Result<()> {
        config.validate()?;
        let shape = GridShape::new(
            self.layout.number_of_columns(),
            self.layout.number_of_rows(),
            config.row_height,
            config.edge_insets,
        )?;
        self.layout.set_shape(shape)?;
        self.model.set_palette(config.palette.clone());
        self.sync_viewport();
        Ok(())
    }

    /// Resize the viewport. Returns whether the layout was invalidated.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.viewport.resize(width, height);
        let invalidated = self.layout.set_viewport_bounds(self.viewport.bounds());
        self.sync_viewport();
        invalidated
    }

    /// Scroll by a delta, clamped to the content
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        self.viewport
            .scroll_by(delta_x, delta_y, self.layout.content_size());
        self.layout.set_viewport_bounds(self.viewport.bounds());
    }

    /// Scroll to an absolute position, clamped to the content
    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.viewport.set_scroll(x, y, self.layout.content_size());
        self.layout.set_viewport_bounds(self.viewport.bounds());
    }

    /// Push viewport bounds into the layout, then clamp the scroll offset
    /// against the (possibly new) content size.
    fn sync_viewport(&mut self) {
        self.layout.set_viewport_bounds(self.viewport.bounds());
        self.viewport.clamp_scroll(self.layout.content_size());
        self.layout.set_viewport_bounds(self.viewport.bounds());
    }

    pub fn selected_column(&self) -> Option<u32> {
        self.selected_column
    }

    /// Highlight a column; out-of-range columns clear the selection
    pub fn select_column(&mut self, column: Option<u32>) {
        self.selected_column = column.filter(|c| *c < self.layout.number_of_columns());
    }

    /// Select the column under a point given in screen coordinates
    pub fn select_at(&mut self, screen_x: f32, screen_y: f32) -> Option<(u32, u32)> {
        let point: Point = self.viewport.to_content(screen_x, screen_y);
        let slot = self.layout.slot_at(point);
        self.select_column(slot.map(|(column, _)| column));
        slot
    }

    pub fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// Content for an element, honoring the column selection
    pub fn content(&self, kind: ElementKind) -> ElementContent {
        match kind {
            ElementKind::Background { column } if self.selected_column == Some(column) => {
                ElementContent {
                    background: self.model.fill_color_for(column, true),
                    label: None,
                    text_color: None,
                }
            }
            _ => self.model.content(kind),
        }
    }

    /// Render items intersecting `rect`, in drawing order (z-index, stable)
    pub fn render(&self, rect: Rect) -> Vec<RenderItem> {
        let mut items: Vec<RenderItem> = self
            .layout
            .layout_attributes_in(rect)
            .into_iter()
            .map(|(element, frame)| RenderItem {
                element,
                frame,
                content: self.content(element),
            })
            .collect();
        items.sort_by_key(|item| item.frame.z_index);
        items
    }

    /// Render items for the current viewport
    pub fn visible_items(&self) -> Vec<RenderItem> {
        self.render(self.viewport.bounds())
    }

    /// Counts and tracks currently in effect
    pub fn configuration(&self) -> ModeConfiguration {
        ModeConfiguration {
            number_of_columns: self.layout.number_of_columns(),
            number_of_rows: self.layout.number_of_rows(),
            column_labels: self.model.column_labels().cloned(),
            row_labels: self.model.row_labels().cloned(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    fn week_view() -> CalendarView {
        CalendarView::new(CalendarMode::Week, &GridConfig::default(), 760.0, 600.0).unwrap()
    }

    #[test]
    fn test_new_applies_mode() {
        let view = week_view();
        assert_eq!(view.layout().number_of_columns(), 7);
        assert_eq!(view.layout().number_of_rows(), 48);
        assert!(view.layout().show_column_labels());
        assert!(view.layout().show_row_labels());
        assert_eq!(view.model().column_label(0), Some("Sun"));
    }

    #[test]
    fn test_day_mode_hides_column_labels() {
        let mut view = week_view();
        view.set_mode(CalendarMode::Day).unwrap();
        assert_eq!(view.mode(), CalendarMode::Day);
        assert!(!view.layout().show_column_labels());
        assert!(view.layout().show_row_labels());
        assert_eq!(view.layout().number_of_rows(), 72);
        assert_eq!(view.model().column_label(0), None);
    }

    #[test]
    fn test_render_is_sorted_by_z_index() {
        let view = week_view();
        let items = view.visible_items();
        assert!(!items.is_empty());
        assert!(items
            .windows(2)
            .all(|w| w[0].frame.z_index <= w[1].frame.z_index));
    }

    #[test]
    fn test_selection_overrides_fill_and_clears_on_mode_switch() {
        let mut view = week_view();
        view.select_column(Some(5));
        let content = view.content(ElementKind::Background { column: 5 });
        assert_eq!(content.background, view.model().palette().selected_fill);

        view.set_mode(CalendarMode::Day).unwrap();
        assert_eq!(view.selected_column(), None);
    }

    #[test]
    fn test_select_at_screen_point() {
        let mut view = week_view();
        let w = view.layout().column_width();
        let slot = view.select_at(60.0 + 2.5 * w, 40.0 + 10.0);
        assert_eq!(slot, Some((2, 0)));
        assert_eq!(view.selected_column(), Some(2));

        assert_eq!(view.select_at(5.0, 5.0), None);
        assert_eq!(view.selected_column(), None);
    }

    #[test]
    fn test_scroll_is_clamped_and_does_not_invalidate() {
        let mut view = week_view();
        let width = view.layout().column_width();
        view.scroll_by(0.0, 10_000.0);
        let max_y = view.content_size().height - 600.0;
        assert_eq!(view.viewport().scroll_y, max_y);
        assert_eq!(view.layout().viewport_bounds().y, max_y);
        assert_eq!(view.layout().column_width(), width);
    }

    #[test]
    fn test_shrinking_content_reclamps_scroll() {
        let mut view = CalendarView::new(CalendarMode::Day, &GridConfig::default(), 760.0, 600.0)
            .unwrap();
        view.set_scroll(0.0, 100_000.0);
        view.set_mode(CalendarMode::Week).unwrap();
        let max_y = view.content_size().height - 600.0;
        assert_eq!(view.viewport().scroll_y, max_y);
    }

    #[test]
    fn test_set_config_keeps_mode() {
        let mut view = week_view();
        let config = GridConfig {
            row_height: 20.0,
            ..GridConfig::default()
        };
        view.set_config(&config).unwrap();
        assert_eq!(view.layout().number_of_rows(), 48);
        assert_eq!(view.content_size().height, 40.0 + 20.0 * 48.0 + 20.0);

        let bad = GridConfig {
            row_height: -1.0,
            ..GridConfig::default()
        };
        assert!(view.set_config(&bad).is_err());
        assert_eq!(view.layout().row_height(), 20.0);
    }
}
