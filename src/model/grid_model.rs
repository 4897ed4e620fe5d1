//! Calendar modes and the label/color side of the grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, GridPalette};
use crate::error::CalviewError;
use crate::layout::ElementKind;

use super::labels::{hour_labels, LabelTrack, WEEKDAY_LABELS};

/// Which calendar grid to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    /// Seven day columns, half-hour rows
    #[default]
    Week,
    /// One column, twenty-minute rows
    Day,
}

impl CalendarMode {
    /// Unlabeled rows between consecutive hour labels
    pub const fn minor_ticks(self) -> usize {
        match self {
            CalendarMode::Week => 1,
            CalendarMode::Day => 2,
        }
    }

    /// Everything a mode switch replaces, built in one piece.
    pub fn configuration(self) -> ModeConfiguration {
        let row_labels = LabelTrack::interleaved(&hour_labels(), self.minor_ticks());
        let (number_of_columns, column_labels) = match self {
            CalendarMode::Week => {
                let labels = LabelTrack::from_labels(&WEEKDAY_LABELS);
                (labels.len(), Some(labels))
            }
            CalendarMode::Day => (1, None),
        };
        ModeConfiguration {
            number_of_columns: count_u32(number_of_columns),
            // One more divider than rows
            number_of_rows: count_u32(row_labels.len().saturating_sub(1)),
            column_labels,
            row_labels: Some(row_labels),
        }
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarMode::Week => write!(f, "week"),
            CalendarMode::Day => write!(f, "day"),
        }
    }
}

impl FromStr for CalendarMode {
    type Err = CalviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(CalendarMode::Week),
            "day" => Ok(CalendarMode::Day),
            other => Err(CalviewError::UnknownMode(other.to_string())),
        }
    }
}

/// Counts and label tracks for one mode; applied as a single unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfiguration {
    pub number_of_columns: u32,
    pub number_of_rows: u32,
    pub column_labels: Option<LabelTrack>,
    pub row_labels: Option<LabelTrack>,
}

/// Drawable content for one element: background plus optional text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementContent {
    pub background: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
}

/// Label tracks and color rules of the grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridModel {
    column_labels: Option<LabelTrack>,
    row_labels: Option<LabelTrack>,
    palette: GridPalette,
}

impl GridModel {
    pub fn new(palette: GridPalette) -> Self {
        Self {
            column_labels: None,
            row_labels: None,
            palette,
        }
    }

    pub fn palette(&self) -> &GridPalette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: GridPalette) {
        self.palette = palette;
    }

    pub fn column_labels(&self) -> Option<&LabelTrack> {
        self.column_labels.as_ref()
    }

    pub fn row_labels(&self) -> Option<&LabelTrack> {
        self.row_labels.as_ref()
    }

    /// Replace both tracks wholesale
    pub fn set_tracks(&mut self, column_labels: Option<LabelTrack>, row_labels: Option<LabelTrack>) {
        self.column_labels = column_labels;
        self.row_labels = row_labels;
    }

    /// Header text for a column; `None` when there is no column track
    pub fn column_label(&self, column: u32) -> Option<&str> {
        self.column_labels.as_ref()?.get(column)
    }

    /// Row label text; `None` for minor ticks and out-of-range rows
    pub fn row_label(&self, row: u32) -> Option<&str> {
        self.row_labels.as_ref()?.get(row)
    }

    /// Alternating column background
    pub fn fill_color(&self, column: u32) -> Color {
        self.palette.column_fill(column)
    }

    /// Column background, honoring selection
    pub fn fill_color_for(&self, column: u32, selected: bool) -> Color {
        if selected {
            self.palette.selected_fill
        } else {
            self.fill_color(column)
        }
    }

    /// Content for an element of the given kind
    pub fn content(&self, kind: ElementKind) -> ElementContent {
        match kind {
            ElementKind::Background { column } => ElementContent {
                background: self.fill_color(column),
                label: None,
                text_color: None,
            },
            ElementKind::Divider { .. } => ElementContent {
                background: self.palette.divider,
                label: None,
                text_color: None,
            },
            ElementKind::ColumnLabel { column } => self.label_content(self.column_label(column)),
            ElementKind::RowLabel { row } => self.label_content(self.row_label(row)),
        }
    }

    fn label_content(&self, label: Option<&str>) -> ElementContent {
        ElementContent {
            background: Color::TRANSPARENT,
            label: label.map(str::to_string),
            text_color: Some(self.palette.label),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_week_configuration() {
        let config = CalendarMode::Week.configuration();
        assert_eq!(config.number_of_columns, 7);
        assert_eq!(config.number_of_rows, 48);
        let rows = config.row_labels.unwrap();
        assert_eq!(rows.len(), 49);
        assert_eq!(rows.get(0), Some("12 AM"));
        assert_eq!(rows.get(1), None);
        assert_eq!(rows.get(2), Some("1 AM"));
        assert_eq!(rows.get(48), Some("12 AM"));
        assert_eq!(config.column_labels.unwrap().len(), 7);
    }

    #[test]
    fn test_day_configuration() {
        let config = CalendarMode::Day.configuration();
        assert_eq!(config.number_of_columns, 1);
        assert_eq!(config.number_of_rows, 72);
        assert!(config.column_labels.is_none());
        let rows = config.row_labels.unwrap();
        assert_eq!(rows.len(), 73);
        assert_eq!(rows.get(3), Some("1 AM"));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("week".parse::<CalendarMode>().unwrap(), CalendarMode::Week);
        assert_eq!(" Day ".parse::<CalendarMode>().unwrap(), CalendarMode::Day);
        assert!(matches!(
            "month".parse::<CalendarMode>(),
            Err(CalviewError::UnknownMode(_))
        ));
        assert_eq!(CalendarMode::Day.to_string(), "day");
    }

    #[test]
    fn test_label_lookups_without_tracks() {
        let model = GridModel::default();
        assert_eq!(model.column_label(0), None);
        assert_eq!(model.row_label(0), None);
    }

    #[test]
    fn test_content_per_kind() {
        let mut model = GridModel::new(GridPalette::default());
        let config = CalendarMode::Week.configuration();
        model.set_tracks(config.column_labels, config.row_labels);
        let palette = GridPalette::default();

        let bg = model.content(ElementKind::Background { column: 1 });
        assert_eq!(bg.background, palette.alternate_fill);
        assert_eq!(bg.label, None);

        let divider = model.content(ElementKind::Divider { row: 5 });
        assert_eq!(divider.background, palette.divider);

        let header = model.content(ElementKind::ColumnLabel { column: 3 });
        assert_eq!(header.label.as_deref(), Some("Wed"));
        assert!(header.background.is_transparent());
        assert_eq!(header.text_color, Some(palette.label));

        let minor = model.content(ElementKind::RowLabel { row: 1 });
        assert_eq!(minor.label, None);
        assert_eq!(minor.text_color, Some(palette.label));
    }

    #[test]
    fn test_selected_fill() {
        let model = GridModel::default();
        assert_eq!(model.fill_color_for(2, true), model.palette().selected_fill);
        assert_eq!(model.fill_color_for(2, false), model.palette().fill);
    }
}
