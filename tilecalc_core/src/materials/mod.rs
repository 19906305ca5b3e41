//! # Materials
//!
//! The tile catalog and the installation consumables (copper grounding wire
//! and tile adhesive) whose usage scales with floor area.
//!
//! ## Example
//!
//! ```rust
//! use tilecalc_core::materials::{MaterialRates, TileSize};
//!
//! let tile = TileSize::Mm600.spec();
//! assert_eq!(tile.pieces_per_sqm, 2.78);
//!
//! // Defaults, with a different adhesive coverage
//! let rates = MaterialRates::default().with_adhesive_coverage(50.0);
//! assert_eq!(rates.copper_wire_m_per_sqm, 0.63);
//! ```

pub mod tiles;

pub use tiles::{TileSize, TileSpec};

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Default copper wire usage (m per sqm)
pub const DEFAULT_COPPER_WIRE_M_PER_SQM: f64 = 0.63;

/// Default adhesive coverage (sqm per 15 kg bucket)
pub const DEFAULT_ADHESIVE_SQM_PER_BUCKET: f64 = 70.0;

/// Consumption rates for installation materials.
///
/// ## JSON Example
///
/// ```json
/// {
///   "copper_wire_m_per_sqm": 0.63,
///   "adhesive_sqm_per_bucket": 70.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRates {
    /// Copper wire needed per square meter of floor (m)
    pub copper_wire_m_per_sqm: f64,
    /// Floor area one adhesive bucket covers (sqm)
    pub adhesive_sqm_per_bucket: f64,
}

impl MaterialRates {
    pub fn new(copper_wire_m_per_sqm: f64, adhesive_sqm_per_bucket: f64) -> Self {
        MaterialRates {
            copper_wire_m_per_sqm,
            adhesive_sqm_per_bucket,
        }
    }

    /// Builder method to override the copper wire rate
    pub fn with_wire_rate(mut self, copper_wire_m_per_sqm: f64) -> Self {
        self.copper_wire_m_per_sqm = copper_wire_m_per_sqm;
        self
    }

    /// Builder method to override the adhesive coverage
    pub fn with_adhesive_coverage(mut self, adhesive_sqm_per_bucket: f64) -> Self {
        self.adhesive_sqm_per_bucket = adhesive_sqm_per_bucket;
        self
    }

    /// Validate that both rates are finite and positive.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("copper_wire_m_per_sqm", self.copper_wire_m_per_sqm)?;
        require_positive("adhesive_sqm_per_bucket", self.adhesive_sqm_per_bucket)?;
        Ok(())
    }
}

impl Default for MaterialRates {
    fn default() -> Self {
        MaterialRates::new(DEFAULT_COPPER_WIRE_M_PER_SQM, DEFAULT_ADHESIVE_SQM_PER_BUCKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_default_rates() {
        let rates = MaterialRates::default();
        assert_eq!(rates.copper_wire_m_per_sqm, 0.63);
        assert_eq!(rates.adhesive_sqm_per_bucket, 70.0);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let rates = MaterialRates::default()
            .with_wire_rate(0.8)
            .with_adhesive_coverage(50.0);
        assert_eq!(rates, MaterialRates::new(0.8, 50.0));
    }

    #[test]
    fn test_zero_adhesive_coverage_rejected() {
        let err = MaterialRates::default().with_adhesive_coverage(0.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "adhesive_sqm_per_bucket"));
    }

    #[test]
    fn test_negative_wire_rate_rejected() {
        let err = MaterialRates::default().with_wire_rate(-0.1).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rates: MaterialRates = serde_json::from_str(r#"{"adhesive_sqm_per_bucket": 50.0}"#).unwrap();
        assert_eq!(rates.copper_wire_m_per_sqm, 0.63);
        assert_eq!(rates.adhesive_sqm_per_bucket, 50.0);
    }
}
