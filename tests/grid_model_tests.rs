//! Grid model tests
//!
//! Tests for the week/day label tracks, per-position label lookups and
//! alternating fill colors.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use calview::model::{hour_labels, WEEKDAY_LABELS};
use calview::{CalendarMode, GridModel, GridPalette};
use test_case::test_case;

fn model_for(mode: CalendarMode) -> GridModel {
    let configuration = mode.configuration();
    let mut model = GridModel::new(GridPalette::default());
    model.set_tracks(configuration.column_labels, configuration.row_labels);
    model
}

#[test]
fn week_configuration_shape() {
    let configuration = CalendarMode::Week.configuration();
    assert_eq!(configuration.number_of_columns, 7);
    assert_eq!(configuration.number_of_rows, 48);

    let columns: Vec<_> = configuration.column_labels.as_ref().unwrap().iter().collect();
    let expected: Vec<_> = WEEKDAY_LABELS.iter().map(|s| Some(*s)).collect();
    assert_eq!(columns, expected);

    let rows = configuration.row_labels.as_ref().unwrap();
    assert_eq!(rows.len(), 49);
    assert_eq!(rows.get(0), Some("12 AM"));
    assert_eq!(rows.get(1), None);
    assert_eq!(rows.get(2), Some("1 AM"));
    assert_eq!(rows.get(24), Some("12 PM"));
    assert_eq!(rows.get(48), Some("12 AM"));
}

#[test]
fn week_rows_alternate_label_and_minor_tick() {
    let configuration = CalendarMode::Week.configuration();
    let rows: Vec<_> = configuration.row_labels.as_ref().unwrap().iter().collect();
    let hours = hour_labels();
    for (index, label) in rows.iter().enumerate() {
        if index % 2 == 0 {
            assert_eq!(*label, Some(hours[index / 2].as_str()));
        } else {
            assert_eq!(*label, None);
        }
    }
}

#[test]
fn day_configuration_shape() {
    let configuration = CalendarMode::Day.configuration();
    assert_eq!(configuration.number_of_columns, 1);
    assert!(configuration.column_labels.is_none());
    assert_eq!(configuration.number_of_rows, 72);

    let rows: Vec<_> = configuration.row_labels.as_ref().unwrap().iter().collect();
    assert_eq!(rows.len(), 73);

    // Exactly two minor ticks between consecutive hour labels
    let labeled: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, label)| label.map(|_| i))
        .collect();
    assert_eq!(labeled.len(), 25);
    for pair in labeled.windows(2) {
        assert_eq!(pair[1] - pair[0], 3);
    }
    assert_eq!(rows[72], Some("12 AM"));
}

#[test_case(CalendarMode::Week, 49 ; "week")]
#[test_case(CalendarMode::Day, 73 ; "day")]
fn one_more_row_label_than_rows(mode: CalendarMode, track_len: usize) {
    let configuration = mode.configuration();
    let rows = configuration.row_labels.unwrap();
    assert_eq!(rows.len(), track_len);
    assert_eq!(rows.len(), configuration.number_of_rows as usize + 1);
}

#[test_case(0, Some("Sun") ; "first")]
#[test_case(6, Some("Sat") ; "last")]
#[test_case(7, None ; "past the end")]
fn week_column_labels(column: u32, expected: Option<&str>) {
    let model = model_for(CalendarMode::Week);
    assert_eq!(model.column_label(column), expected);
}

#[test]
fn day_has_no_column_labels() {
    let model = model_for(CalendarMode::Day);
    assert_eq!(model.column_label(0), None);
    assert_eq!(model.row_label(0), Some("12 AM"));
    assert_eq!(model.row_label(1), None);
    assert_eq!(model.row_label(2), None);
    assert_eq!(model.row_label(3), Some("1 AM"));
    assert_eq!(model.row_label(73), None);
}

#[test_case(0, true ; "column 0")]
#[test_case(1, false ; "column 1")]
#[test_case(2, true ; "column 2")]
#[test_case(3, false ; "column 3")]
#[test_case(4, true ; "column 4")]
fn fill_color_alternates(column: u32, primary: bool) {
    let model = model_for(CalendarMode::Week);
    let palette = GridPalette::default();
    let expected = if primary {
        palette.fill
    } else {
        palette.alternate_fill
    };
    assert_eq!(model.fill_color(column), expected);
}

#[test]
fn mode_names_parse() {
    assert_eq!("WEEK".parse::<CalendarMode>().unwrap(), CalendarMode::Week);
    assert!("fortnight".parse::<CalendarMode>().is_err());
}
