//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`tile_materials`] - Tiles, copper wire and adhesive for a floor area

pub mod tile_materials;

// Re-export commonly used types
pub use tile_materials::{calculate, compute, normalize_area, CalculationResult, TileMaterialsInput};

/// Advisory shown alongside every result
///
/// Display only; the 10% margin is never applied to computed quantities.
pub const WASTE_ADVISORY: &str = "Remember to add 10% extra for cutting waste and errors";

/// Minimum values front ends enforce before calling into the core.
///
/// The core itself only rejects values that are not strictly positive.
pub mod ui_bounds {
    /// Smallest area accepted in square meters
    pub const MIN_AREA_SQM: f64 = 0.1;
    /// Smallest area accepted in square feet
    pub const MIN_AREA_SQFT: f64 = 1.0;
    /// Smallest copper wire rate (m per sqm)
    pub const MIN_WIRE_RATE: f64 = 0.1;
    /// Smallest adhesive coverage (sqm per bucket)
    pub const MIN_ADHESIVE_COVERAGE: f64 = 1.0;

    /// Area prefilled when the unit is square meters
    pub const DEFAULT_AREA_SQM: f64 = 10.0;
    /// Area prefilled when the unit is square feet
    pub const DEFAULT_AREA_SQFT: f64 = 100.0;
}
