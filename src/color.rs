//! Colors for grid backgrounds, dividers and labels.
//!
//! Colors are stored as RGBA bytes and exchanged with hosts and config files
//! as CSS hex strings (`#RRGGBB` or `#RRGGBBAA`), which Canvas 2D accepts directly.

use serde::{Deserialize, Serialize};

use crate::error::CalviewError;

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray at the given white level (0.0 = black, 1.0 = white).
    pub fn gray(white: f64) -> Self {
        let v = unit_to_byte(white);
        Self::rgb(v, v, v)
    }

    /// Parse from a hex string (with or without #).
    /// Accepts 6 (RGB) or 8 (RGBA) hex digits.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
        };
        match hex.len() {
            6 => Some(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::rgba(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Convert to a CSS hex string. Opaque colors omit the alpha byte.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// The cast is safe because we clamp to [0, 255] before converting.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(v: f64) -> u8 {
    let v = if v.is_finite() { v } else { 0.0 };
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = CalviewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or(CalviewError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Fill, divider and label colors for a calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridPalette {
    /// Background of even columns
    pub fill: Color,
    /// Background of odd columns
    pub alternate_fill: Color,
    /// Background of a selected column
    pub selected_fill: Color,
    /// Hairline divider color
    pub divider: Color,
    /// Current-time indicator color. The grid has no indicator element; the
    /// host reads this when it draws its own "now" line.
    pub indicator: Color,
    /// Row and column label text color
    pub label: Color,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            fill: Color::gray(0.1),
            alternate_fill: Color::gray(0.3),
            selected_fill: Color::gray(0.6),
            divider: Color::gray(0.5),
            indicator: Color::gray(1.0),
            label: Color::gray(1.0),
        }
    }
}

impl GridPalette {
    /// Background for a column: even columns use `fill`, odd ones `alternate_fill`.
    pub fn column_fill(&self, column: u32) -> Color {
        if column % 2 == 0 {
            self.fill
        } else {
            self.alternate_fill
        }
    }
}
