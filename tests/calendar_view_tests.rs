//! Calendar view tests
//!
//! Tests for mode switching as a single transition, render output for a
//! viewport, and scroll/resize handling.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use calview::{CalendarMode, CalendarView, ElementKind, GridConfig, Rect};
use test_case::test_case;

fn create_view(mode: CalendarMode) -> CalendarView {
    CalendarView::new(mode, &GridConfig::default(), 760.0, 600.0).unwrap()
}

#[test]
fn week_day_week_restores_configuration() {
    let mut view = create_view(CalendarMode::Week);
    let original = view.configuration();
    let original_items = view.visible_items();
    let original_size = view.content_size();

    view.set_mode(CalendarMode::Day).unwrap();
    assert_ne!(view.configuration(), original);

    view.set_mode(CalendarMode::Week).unwrap();
    assert_eq!(view.configuration(), original);
    assert_eq!(view.visible_items(), original_items);
    assert_eq!(view.content_size(), original_size);
}

#[test_case(CalendarMode::Week, 7, 48, true ; "week")]
#[test_case(CalendarMode::Day, 1, 72, false ; "day")]
fn mode_switch_updates_all_fields(
    mode: CalendarMode,
    columns: u32,
    rows: u32,
    column_labels: bool,
) {
    let other = match mode {
        CalendarMode::Week => CalendarMode::Day,
        CalendarMode::Day => CalendarMode::Week,
    };
    let mut view = create_view(other);
    view.set_mode(mode).unwrap();

    let configuration = view.configuration();
    assert_eq!(configuration.number_of_columns, columns);
    assert_eq!(configuration.number_of_rows, rows);
    assert_eq!(configuration.column_labels.is_some(), column_labels);
    assert_eq!(
        configuration.row_labels.as_ref().unwrap().len(),
        rows as usize + 1
    );
    assert_eq!(view.layout().show_column_labels(), column_labels);
    assert!(view.layout().show_row_labels());
}

#[test]
fn render_pairs_frames_with_labels() {
    let view = create_view(CalendarMode::Week);
    let items = view.render(Rect::from_size(view.content_size()));
    assert_eq!(items.len(), 7 + 7 + 49 + 49);

    let monday = items
        .iter()
        .find(|item| item.element == ElementKind::ColumnLabel { column: 1 })
        .unwrap();
    assert_eq!(monday.content.label.as_deref(), Some("Mon"));
    assert_eq!(monday.frame.z_index, 2);

    let noon = items
        .iter()
        .find(|item| item.element == ElementKind::RowLabel { row: 24 })
        .unwrap();
    assert_eq!(noon.content.label.as_deref(), Some("12 PM"));

    let half_past = items
        .iter()
        .find(|item| item.element == ElementKind::RowLabel { row: 25 })
        .unwrap();
    assert_eq!(half_past.content.label, None);
}

#[test]
fn render_order_draws_labels_last() {
    let view = create_view(CalendarMode::Day);
    let items = view.visible_items();
    let first_label = items
        .iter()
        .position(|item| matches!(item.element, ElementKind::RowLabel { .. }))
        .unwrap();
    assert!(items[first_label..]
        .iter()
        .all(|item| matches!(item.element, ElementKind::RowLabel { .. })));
    assert!(matches!(items[0].element, ElementKind::Background { .. }));
}

#[test]
fn resize_invalidates_once_and_rescales_columns() {
    let mut view = create_view(CalendarMode::Week);
    assert!((view.layout().column_width() - 97.142_86).abs() < 0.01);

    assert!(view.resize(1000.0, 600.0));
    assert!((view.layout().column_width() - 131.428_57).abs() < 0.01);
    assert!(!view.resize(1000.0, 600.0));
}

#[test]
fn scrolling_moves_the_visible_window() {
    let mut view = create_view(CalendarMode::Week);
    let top = view.visible_items();
    assert!(top
        .iter()
        .any(|item| item.element == ElementKind::ColumnLabel { column: 0 }));

    view.scroll_by(0.0, 1000.0);
    let scrolled = view.visible_items();
    assert!(!scrolled
        .iter()
        .any(|item| item.element == ElementKind::ColumnLabel { column: 0 }));
    assert!(scrolled
        .iter()
        .any(|item| item.element == ElementKind::Divider { row: 30 }));
}

#[test]
fn render_items_serialize_to_json() {
    let view = create_view(CalendarMode::Week);
    let items = view.render(Rect::new(0.0, 0.0, 760.0, 40.0));
    let json = serde_json::to_value(&items).unwrap();
    let first = &json[0];
    assert_eq!(first["element"]["kind"], "background");
    assert_eq!(first["element"]["column"], 0);
    assert_eq!(first["frame"]["zIndex"], 0);
    assert_eq!(first["content"]["background"], "#1A1A1A");
}

#[test]
fn custom_config_changes_geometry_and_colors() {
    let config = GridConfig::from_json(
        r##"{ "rowHeight": 30, "edgeInsets": { "top": 30, "left": 50, "bottom": 10, "right": 10 },
             "palette": { "fill": "#112233" } }"##,
    )
    .unwrap();
    let view = CalendarView::new(CalendarMode::Day, &config, 400.0, 600.0).unwrap();
    assert_eq!(view.content_size().height, 30.0 + 30.0 * 72.0 + 10.0);
    assert_eq!(view.layout().column_width(), 340.0);
    assert_eq!(view.model().fill_color(0).to_hex(), "#112233");
}
