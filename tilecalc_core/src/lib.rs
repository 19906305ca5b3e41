//! # tilecalc_core - Vinyl Tile Material Calculator
//!
//! `tilecalc_core` works out how much material a vinyl tile floor needs:
//! tile pieces, copper grounding wire and adhesive buckets. All inputs and
//! outputs are JSON-serializable so any front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use tilecalc_core::{calculate, AreaUnit, TileMaterialsInput, TileSize};
//!
//! let input = TileMaterialsInput::new(TileSize::Mm900, 100.0, AreaUnit::SquareFeet);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.tiles_needed, 11.43);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Area normalization and material takeoff
//! - [`materials`] - Tile catalog and material consumption rates
//! - [`units`] - Type-safe area units
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute, normalize_area, CalculationResult, TileMaterialsInput};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialRates, TileSize, TileSpec};
pub use units::{AreaUnit, SqFt, SqM};
