//! Logical content of the grid: modes, label tracks and per-element colors.

mod grid_model;
mod labels;

pub use grid_model::{CalendarMode, ElementContent, GridModel, ModeConfiguration};
pub use labels::{hour_labels, LabelTrack, HOURS_PER_DAY, WEEKDAY_LABELS};
