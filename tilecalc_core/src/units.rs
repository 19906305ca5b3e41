//! # Unit Types
//!
//! Type-safe wrappers for floor area. Square meters are the canonical unit;
//! square feet are accepted at the edge and converted with the fixed factor
//! [`SQM_PER_SQFT`].
//!
//! ## Example
//!
//! ```rust
//! use tilecalc_core::units::{SqFt, SqM};
//!
//! let room = SqFt(100.0);
//! let room_sqm: SqM = room.into();
//! assert_eq!(room_sqm.0, 100.0 * 0.092903);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Square meters in one square foot
pub const SQM_PER_SQFT: f64 = 0.092903;

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqFt> for SqM {
    fn from(sqft: SqFt) -> Self {
        SqM(sqft.0 * SQM_PER_SQFT)
    }
}

/// Unit an area value was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "sqm")]
    SquareMeters,
    #[serde(rename = "sqft")]
    SquareFeet,
}

impl AreaUnit {
    /// All area units for UI selection
    pub const ALL: [AreaUnit; 2] = [AreaUnit::SquareMeters, AreaUnit::SquareFeet];

    /// Short unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "sqm",
            AreaUnit::SquareFeet => "sqft",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "Square meters",
            AreaUnit::SquareFeet => "Square feet",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '_', '-', '.'], "").as_str() {
            "sqm" | "m2" | "m²" | "squaremeters" | "squaremetres" => Ok(AreaUnit::SquareMeters),
            "sqft" | "ft2" | "ft²" | "squarefeet" | "sf" => Ok(AreaUnit::SquareFeet),
            _ => Err(CalcError::invalid_input("unit", s, "Unknown area unit (expected sqm or sqft)")),
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqft_to_sqm() {
        let sqm: SqM = SqFt(100.0).into();
        assert_eq!(sqm.0, 100.0 * 0.092903);
        assert!((sqm.0 - 9.2903).abs() < 1e-12);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(AreaUnit::from_str_flexible("sqm").unwrap(), AreaUnit::SquareMeters);
        assert_eq!(AreaUnit::from_str_flexible("Square meters").unwrap(), AreaUnit::SquareMeters);
        assert_eq!(AreaUnit::from_str_flexible("SQ FT").unwrap(), AreaUnit::SquareFeet);
        assert_eq!(AreaUnit::from_str_flexible("square_feet").unwrap(), AreaUnit::SquareFeet);
        assert!(AreaUnit::from_str_flexible("acres").is_err());
    }

    #[test]
    fn test_serialization() {
        let area = SqM(12.5);
        assert_eq!(serde_json::to_string(&area).unwrap(), "12.5");
        assert_eq!(serde_json::to_string(&AreaUnit::SquareFeet).unwrap(), "\"sqft\"");

        let unit: AreaUnit = serde_json::from_str("\"sqm\"").unwrap();
        assert_eq!(unit, AreaUnit::SquareMeters);
    }
}
