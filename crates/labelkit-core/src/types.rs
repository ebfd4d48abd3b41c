//! Shared identifier and mode types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Opaque polygon identifier, stable for the lifetime of the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonId(pub u64);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Active editor tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Drag shapes or vertices, or pan the canvas.
    #[default]
    Move,
    /// Click out polygon vertices.
    Polygon,
    /// Reserved; currently draws straight-edged polygons like `Polygon`.
    Bezier,
    /// Select shapes.
    Edit,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Polygon => write!(f, "polygon"),
            Self::Bezier => write!(f, "bezier"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

/// An opaque RGB label colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelColor(u32);

impl LabelColor {
    /// Builds a colour from its red, green and blue components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parses `#rrggbb` (the `#` is optional, hex digits are case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor {
                value: value.to_string(),
            });
        }
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| Error::InvalidColor {
                value: value.to_string(),
            })
    }

    /// The packed `0xRRGGBB` value.
    pub fn to_u32(self) -> u32 {
        self.0
    }

    /// Red, green and blue components.
    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for LabelColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LabelColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<LabelColor> for String {
    fn from(color: LabelColor) -> Self {
        color.to_string()
    }
}
