//! Grid configuration: row height, edge insets and palette.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides:
//!
//! ```json
//! { "rowHeight": 32, "edgeInsets": { "left": 72 }, "palette": { "fill": "#202020" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::color::GridPalette;
use crate::error::{CalviewError, Result};
use crate::geometry::EdgeInsets;

/// Default height of one sub-row in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// Insets leaving room for column labels (top) and row labels (left)
pub const DEFAULT_EDGE_INSETS: EdgeInsets = EdgeInsets::new(40.0, 60.0, 20.0, 20.0);

/// Host-tunable appearance of a calendar grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Height of one grid row (a minor-tick slot) in pixels
    pub row_height: f32,
    /// Space around the grid body; top holds column labels, left holds row labels
    pub edge_insets: EdgeInsets,
    /// Fill, divider and label colors
    pub palette: GridPalette,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            edge_insets: DEFAULT_EDGE_INSETS,
            palette: GridPalette::default(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or values are out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that row height is positive and insets are non-negative.
    ///
    /// # Errors
    /// Returns `CalviewError::Config` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(CalviewError::Config(format!(
                "rowHeight must be positive, got {}",
                self.row_height
            )));
        }
        if !self.edge_insets.is_valid() {
            return Err(CalviewError::Config(format!(
                "edgeInsets must be non-negative, got {:?}",
                self.edge_insets
            )));
        }
        Ok(())
    }
}
