//! # Error Types
//!
//! Structured error types for tilecalc_core. Every failure carries enough
//! context (field, offending value, reason) for a front end to show a
//! validation message or emit it as JSON.
//!
//! ## Example
//!
//! ```rust
//! use tilecalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_sqm: f64) -> CalcResult<()> {
//!     if area_sqm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "area_sqm".to_string(),
//!             value: area_sqm.to_string(),
//!             reason: "Area must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tilecalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, NaN, infinite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Tile label not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

/// Reject values that are not finite and strictly positive.
///
/// Shared by every entry point that takes an area, rate or coverage.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        tracing::warn!(field, value, "rejected non-finite input");
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        tracing::warn!(field, value, "rejected non-positive input");
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}
