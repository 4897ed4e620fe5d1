//! Label tracks: dense per-position label sequences with gaps for minor ticks.

use serde::{Deserialize, Serialize};

/// Number of hourly major ticks in a day
pub const HOURS_PER_DAY: usize = 24;

/// Day column headers for the week view, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Ordered labels indexed by row or column position.
///
/// A `None` entry is a minor tick: the position exists (and has a divider)
/// but carries no text. Positions past the end also read as no label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTrack(Vec<Option<String>>);

impl LabelTrack {
    pub fn new(labels: Vec<Option<String>>) -> Self {
        Self(labels)
    }

    /// Track where every position carries a label
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self(labels.iter().map(|s| Some(s.as_ref().to_string())).collect())
    }

    /// Build a track of major-tick labels with `minor_ticks` unlabeled
    /// positions between consecutive labels (none after the last).
    pub fn interleaved<S: AsRef<str>>(major: &[S], minor_ticks: usize) -> Self {
        let mut labels = Vec::with_capacity(major.len() + major.len().saturating_sub(1) * minor_ticks);
        for (index, label) in major.iter().enumerate() {
            labels.push(Some(label.as_ref().to_string()));
            if index + 1 != major.len() {
                labels.extend(std::iter::repeat(None).take(minor_ticks));
            }
        }
        Self(labels)
    }

    /// Label at `index`; `None` for minor ticks and out-of-range positions
    pub fn get(&self, index: u32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.0.get(i))
            .and_then(|label| label.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(|label| label.as_deref())
    }

    /// Number of labeled (major-tick) positions
    pub fn major_tick_count(&self) -> usize {
        self.0.iter().filter(|label| label.is_some()).count()
    }
}

/// Hour names for one day plus the closing midnight:
/// "12 AM", "1 AM" .. "11 AM", "12 PM", "1 PM" .. "11 PM", "12 AM".
pub fn hour_labels() -> Vec<String> {
    (0..=HOURS_PER_DAY).map(hour_label).collect()
}

fn hour_label(hour: usize) -> String {
    let hour = hour % HOURS_PER_DAY;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {suffix}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_labels() {
        let hours = hour_labels();
        assert_eq!(hours.len(), 25);
        assert_eq!(hours[0], "12 AM");
        assert_eq!(hours[1], "1 AM");
        assert_eq!(hours[11], "11 AM");
        assert_eq!(hours[12], "12 PM");
        assert_eq!(hours[13], "1 PM");
        assert_eq!(hours[23], "11 PM");
        assert_eq!(hours[24], "12 AM");
    }

    #[test]
    fn test_interleaved_places_gaps_between_labels_only() {
        let track = LabelTrack::interleaved(&["a", "b", "c"], 2);
        let labels: Vec<_> = track.iter().collect();
        assert_eq!(
            labels,
            vec![Some("a"), None, None, Some("b"), None, None, Some("c")]
        );
    }

    #[test]
    fn test_interleaved_without_minor_ticks() {
        let track = LabelTrack::interleaved(&["a", "b"], 0);
        assert_eq!(track, LabelTrack::from_labels(&["a", "b"]));
    }

    #[test]
    fn test_get_out_of_range_is_no_label() {
        let track = LabelTrack::from_labels(&WEEKDAY_LABELS);
        assert_eq!(track.get(0), Some("Sun"));
        assert_eq!(track.get(6), Some("Sat"));
        assert_eq!(track.get(7), None);
        assert_eq!(track.get(u32::MAX), None);
    }

    #[test]
    fn test_major_tick_count() {
        let track = LabelTrack::interleaved(&hour_labels(), 1);
        assert_eq!(track.len(), 49);
        assert_eq!(track.major_tick_count(), 25);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let track = LabelTrack::interleaved(&["a", "b"], 1);
        let json = serde_json::to_string(&track).unwrap();
        assert_eq!(json, r#"["a",null,"b"]"#);
    }
}
