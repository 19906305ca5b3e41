//! Vinyl Tile Catalog
//!
//! The three square tile sizes the calculator supports. Coverage values are
//! the published pieces-per-square-meter figures, rounded to 2 decimals, and
//! are used as-is rather than recomputed from the side length.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Catalog tile sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileSize {
    /// 600 x 600 mm
    #[default]
    #[serde(rename = "600x600 mm")]
    Mm600,
    /// 610 x 610 mm (24" nominal)
    #[serde(rename = "610x610 mm")]
    Mm610,
    /// 900 x 900 mm
    #[serde(rename = "900x900 mm")]
    Mm900,
}

impl TileSize {
    /// All tile sizes in catalog order
    pub const ALL: [TileSize; 3] = [TileSize::Mm600, TileSize::Mm610, TileSize::Mm900];

    /// Catalog record for this size
    pub const fn spec(&self) -> TileSpec {
        match self {
            TileSize::Mm600 => TileSpec {
                name: "600x600 mm",
                side_length_m: 0.6,
                pieces_per_sqm: 2.78,
            },
            TileSize::Mm610 => TileSpec {
                name: "610x610 mm",
                side_length_m: 0.61,
                pieces_per_sqm: 2.69,
            },
            TileSize::Mm900 => TileSpec {
                name: "900x900 mm",
                side_length_m: 0.9,
                pieces_per_sqm: 1.23,
            },
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.spec().name
    }

    /// Parse from common string representations
    ///
    /// Accepts the catalog label ("600x600 mm") and loose variants such as
    /// "600x600", "600 X 600mm" or just "600".
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.to_lowercase().replace([' ', '_', '*', '×'], "");
        let normalized = normalized.trim_end_matches("mm");
        match normalized {
            "600x600" | "600" => Ok(TileSize::Mm600),
            "610x610" | "610" => Ok(TileSize::Mm610),
            "900x900" | "900" => Ok(TileSize::Mm900),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable tile catalog record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileSpec {
    /// Catalog label, e.g. "600x600 mm"
    pub name: &'static str,
    /// Side length of the square tile (m)
    pub side_length_m: f64,
    /// Published tiles needed per square meter
    pub pieces_per_sqm: f64,
}

impl TileSpec {
    /// Face area of one tile (sqm)
    pub fn face_area_sqm(&self) -> f64 {
        self.side_length_m * self.side_length_m
    }
}

impl From<TileSize> for TileSpec {
    fn from(size: TileSize) -> Self {
        size.spec()
    }
}
