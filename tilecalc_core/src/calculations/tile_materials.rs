//! # Tile Material Takeoff
//!
//! Converts a floor area into the quantities needed to lay vinyl tile:
//! tile pieces, copper grounding wire and adhesive buckets.
//!
//! ## Method
//!
//! 1. Normalize the entered area to square meters (`1 sqft = 0.092903 sqm`).
//! 2. Multiply by the tile's published pieces-per-sqm and the wire rate,
//!    divide by the adhesive coverage.
//! 3. Round each output to 2 decimals, once, at the end.
//!
//! Rounding is correct rounding of the exact binary value to 2 decimals,
//! ties to even (see [`round_to_cents`]). A product such as
//! `17.5 * 2.69 = 47.074999999999996` therefore becomes 47.07, not 47.08.
//!
//! ## Example
//!
//! ```rust
//! use tilecalc_core::calculations::tile_materials::{compute, normalize_area};
//! use tilecalc_core::materials::{MaterialRates, TileSize};
//! use tilecalc_core::units::AreaUnit;
//!
//! let area = normalize_area(10.0, AreaUnit::SquareMeters).unwrap();
//! let result = compute(&TileSize::Mm600.spec(), area, &MaterialRates::default()).unwrap();
//!
//! assert_eq!(result.tiles_needed, 27.8);
//! assert_eq!(result.wire_needed, 6.3);
//! assert_eq!(result.adhesive_needed, 0.14);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::materials::{MaterialRates, TileSize, TileSpec};
use crate::units::{AreaUnit, SqFt, SqM};

/// Input for a complete takeoff, as collected by a front end.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tile": "610x610 mm",
///   "area": 50.0,
///   "unit": "sqm",
///   "rates": { "adhesive_sqm_per_bucket": 50.0 }
/// }
/// ```
///
/// `unit` defaults to square meters and `rates` to [`MaterialRates::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMaterialsInput {
    /// Selected catalog tile
    pub tile: TileSize,

    /// Area as entered, in `unit`
    pub area: f64,

    /// Unit `area` was entered in
    #[serde(default)]
    pub unit: AreaUnit,

    /// Material consumption rates
    #[serde(default)]
    pub rates: MaterialRates,
}

impl TileMaterialsInput {
    /// Create an input with default material rates
    pub fn new(tile: TileSize, area: f64, unit: AreaUnit) -> Self {
        TileMaterialsInput {
            tile,
            area,
            unit,
            rates: MaterialRates::default(),
        }
    }

    /// Builder method to override the material rates
    pub fn with_rates(mut self, rates: MaterialRates) -> Self {
        self.rates = rates;
        self
    }
}

/// Material quantities for one floor area.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tiles_needed": 27.8,
///   "wire_needed": 6.3,
///   "adhesive_needed": 0.14,
///   "area_sqm": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Tiles required (pieces, 2 dp)
    pub tiles_needed: f64,

    /// Copper wire required (m, 2 dp)
    pub wire_needed: f64,

    /// Adhesive required (buckets, 2 dp)
    pub adhesive_needed: f64,

    /// Floor area for display (sqm, 2 dp)
    pub area_sqm: f64,
}

/// Round to 2 decimal places.
///
/// Works on the exact binary value rather than `value * 100`, which can
/// land on a midpoint the original value sits below.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Convert an entered area to square meters.
///
/// No rounding is applied. Fails with `InvalidInput` if `value` is not a
/// finite positive number.
pub fn normalize_area(value: f64, unit: AreaUnit) -> CalcResult<SqM> {
    let value = require_positive("area", value)?;

    let area = match unit {
        AreaUnit::SquareMeters => SqM(value),
        AreaUnit::SquareFeet => SqFt(value).into(),
    };

    tracing::debug!(value, unit = %unit, area_sqm = area.0, "normalized area");
    Ok(area)
}

/// Compute tile, wire and adhesive quantities for a normalized area.
///
/// `area` should be the unrounded output of [`normalize_area`]. Fails with
/// `InvalidInput` if the area, either rate, or the tile coverage is not a
/// finite positive number.
pub fn compute(tile: &TileSpec, area: SqM, rates: &MaterialRates) -> CalcResult<CalculationResult> {
    let area_sqm = require_positive("area_sqm", area.0)?;
    require_positive("pieces_per_sqm", tile.pieces_per_sqm)?;
    rates.validate()?;

    let result = CalculationResult {
        tiles_needed: round_to_cents(area_sqm * tile.pieces_per_sqm),
        wire_needed: round_to_cents(area_sqm * rates.copper_wire_m_per_sqm),
        adhesive_needed: round_to_cents(area_sqm / rates.adhesive_sqm_per_bucket),
        area_sqm: round_to_cents(area_sqm),
    };

    tracing::debug!(
        tile = tile.name,
        area_sqm,
        tiles = result.tiles_needed,
        wire_m = result.wire_needed,
        adhesive_buckets = result.adhesive_needed,
        "computed tile materials"
    );
    Ok(result)
}

/// Run a complete takeoff: normalize the area, then compute.
///
/// # Arguments
///
/// * `input` - Tile selection, area, unit and rates
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Rounded quantities
/// * `Err(CalcError)` - If any input is non-positive or not finite
pub fn calculate(input: &TileMaterialsInput) -> CalcResult<CalculationResult> {
    let area = normalize_area(input.area, input.unit)?;
    compute(&input.tile.spec(), area, &input.rates)
}
