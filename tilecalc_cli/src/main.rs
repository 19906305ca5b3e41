//! # Tilecalc CLI
//!
//! Terminal front end for the vinyl tile material calculator.
//!
//! With `--tile` and `--area` it runs once and prints the results; without
//! them it prompts for each value, offering the usual defaults.
//!
//! ```bash
//! tilecalc --tile "600x600 mm" --area 10
//! tilecalc --tile 900 --area 100 --unit sqft --json
//! tilecalc --tile 610 --area 50 --adhesive-coverage 50
//! RUST_LOG=tilecalc_core=debug tilecalc
//! ```

mod prompt;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tilecalc_core::calculations::{ui_bounds, WASTE_ADVISORY};
use tilecalc_core::{calculate, AreaUnit, CalcError, CalcResult, CalculationResult, MaterialRates, TileMaterialsInput, TileSize};

/// Vinyl tile material calculator
///
/// Works out tile pieces, copper wire and adhesive buckets for a floor area.
#[derive(Parser, Debug)]
#[command(name = "tilecalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tile size: "600x600 mm", "610x610 mm" or "900x900 mm" (or 600, 610, 900)
    #[arg(long, short = 't', value_parser = parse_tile)]
    tile: Option<TileSize>,

    /// Area to cover, in --unit
    #[arg(long, short = 'a')]
    area: Option<f64>,

    /// Area unit: sqm or sqft (default sqm)
    #[arg(long, short = 'u', value_parser = parse_unit)]
    unit: Option<AreaUnit>,

    /// Copper wire rate (m per sqm)
    #[arg(long, default_value_t = tilecalc_core::materials::DEFAULT_COPPER_WIRE_M_PER_SQM)]
    wire_rate: f64,

    /// Adhesive coverage (sqm per 15 kg bucket)
    #[arg(long, default_value_t = tilecalc_core::materials::DEFAULT_ADHESIVE_SQM_PER_BUCKET)]
    adhesive_coverage: f64,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Log calculation details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn parse_tile(s: &str) -> Result<TileSize, String> {
    TileSize::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_unit(s: &str) -> Result<AreaUnit, String> {
    AreaUnit::from_str_flexible(s).map_err(|e| e.to_string())
}

/// JSON output: what was asked, what came back
#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a TileMaterialsInput,
    result: CalculationResult,
    advisory: &'static str,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Enforce the minimums an input form would apply before calculating.
fn check_ui_bounds(input: &TileMaterialsInput) -> CalcResult<()> {
    let min_area = match input.unit {
        AreaUnit::SquareMeters => ui_bounds::MIN_AREA_SQM,
        AreaUnit::SquareFeet => ui_bounds::MIN_AREA_SQFT,
    };
    if input.area < min_area {
        return Err(CalcError::invalid_input(
            "area",
            input.area.to_string(),
            format!("Area must be at least {} {}", min_area, input.unit),
        ));
    }
    if input.rates.copper_wire_m_per_sqm < ui_bounds::MIN_WIRE_RATE {
        return Err(CalcError::invalid_input(
            "copper_wire_m_per_sqm",
            input.rates.copper_wire_m_per_sqm.to_string(),
            format!("Wire rate must be at least {} m per sqm", ui_bounds::MIN_WIRE_RATE),
        ));
    }
    if input.rates.adhesive_sqm_per_bucket < ui_bounds::MIN_ADHESIVE_COVERAGE {
        return Err(CalcError::invalid_input(
            "adhesive_sqm_per_bucket",
            input.rates.adhesive_sqm_per_bucket.to_string(),
            format!("Adhesive coverage must be at least {} sqm per bucket", ui_bounds::MIN_ADHESIVE_COVERAGE),
        ));
    }
    Ok(())
}

/// Build the input from flags, prompting for anything missing.
fn collect_input(cli: &Cli) -> anyhow::Result<TileMaterialsInput> {
    let rates = MaterialRates::new(cli.wire_rate, cli.adhesive_coverage);

    match (cli.tile, cli.area) {
        (Some(tile), Some(area)) => {
            Ok(TileMaterialsInput::new(tile, area, cli.unit.unwrap_or_default()).with_rates(rates))
        }
        _ => prompt::interactive_input(answered_by_flags(cli)),
    }
}

/// Flag values carried into the prompts so they are not asked again.
fn answered_by_flags(cli: &Cli) -> prompt::Answered {
    prompt::Answered {
        tile: cli.tile,
        unit: cli.unit,
        area: cli.area,
        rates: MaterialRates::new(cli.wire_rate, cli.adhesive_coverage),
    }
}

fn print_results(input: &TileMaterialsInput, result: &CalculationResult) {
    println!("═══════════════════════════════════════");
    println!("  CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("  {} Tiles Needed:  {} pieces", input.tile, result.tiles_needed);
    println!("  Copper Wire Needed:      {} meters", result.wire_needed);
    println!("  Adhesive Needed:         {} buckets", result.adhesive_needed);
    println!("  Total Area:              {:.2} sqm", result.area_sqm);
    println!();
    println!("  Tip: {}", WASTE_ADVISORY);
    println!("═══════════════════════════════════════");
}

fn print_error(e: &CalcError, json: bool) {
    eprintln!("Error: {}", e);
    if json {
        if let Ok(json) = serde_json::to_string_pretty(e) {
            eprintln!("{}", json);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = match collect_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?input, "collected input");

    if let Err(e) = check_ui_bounds(&input) {
        print_error(&e, cli.json);
        return ExitCode::FAILURE;
    }

    let result = match calculate(&input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e, cli.json);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let report = Report {
            input: &input,
            result,
            advisory: WASTE_ADVISORY,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_results(&input, &result);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_flags() {
        let cli = Cli::try_parse_from([
            "tilecalc", "--tile", "610x610 mm", "--area", "50", "--adhesive-coverage", "50",
        ])
        .unwrap();
        assert_eq!(cli.tile, Some(TileSize::Mm610));
        assert_eq!(cli.area, Some(50.0));
        assert_eq!(cli.unit, None);
        assert_eq!(cli.wire_rate, 0.63);
        assert_eq!(cli.adhesive_coverage, 50.0);

        let input = collect_input(&cli).unwrap();
        assert_eq!(calculate(&input).unwrap().adhesive_needed, 1.0);
    }

    #[test]
    fn test_parse_short_names() {
        let cli = Cli::try_parse_from(["tilecalc", "-t", "900", "-a", "100", "-u", "sqft", "--json"]).unwrap();
        assert_eq!(cli.tile, Some(TileSize::Mm900));
        assert_eq!(cli.unit, Some(AreaUnit::SquareFeet));
        assert!(cli.json);

        let input = collect_input(&cli).unwrap();
        assert_eq!(input.unit, AreaUnit::SquareFeet);
        assert_eq!(input.area, 100.0);
    }

    #[test]
    fn test_area_and_unit_kept_without_tile() {
        let cli = Cli::try_parse_from(["tilecalc", "--area", "25", "--unit", "sqft", "--wire-rate", "0.8"]).unwrap();
        let answered = answered_by_flags(&cli);
        assert_eq!(answered.tile, None);
        assert_eq!(answered.area, Some(25.0));
        assert_eq!(answered.unit, Some(AreaUnit::SquareFeet));
        assert_eq!(answered.rates.copper_wire_m_per_sqm, 0.8);
    }

    #[test]
    fn test_unknown_tile_rejected() {
        assert!(Cli::try_parse_from(["tilecalc", "--tile", "300x300 mm"]).is_err());
    }

    #[test]
    fn test_ui_bounds() {
        let ok = TileMaterialsInput::new(TileSize::Mm600, 0.1, AreaUnit::SquareMeters);
        assert!(check_ui_bounds(&ok).is_ok());

        let small_sqft = TileMaterialsInput::new(TileSize::Mm600, 0.5, AreaUnit::SquareFeet);
        assert!(check_ui_bounds(&small_sqft).is_err());

        let low_coverage = TileMaterialsInput::new(TileSize::Mm600, 10.0, AreaUnit::SquareMeters)
            .with_rates(MaterialRates::default().with_adhesive_coverage(0.5));
        let err = check_ui_bounds(&low_coverage).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_report_json() {
        let input = TileMaterialsInput::new(TileSize::Mm600, 10.0, AreaUnit::SquareMeters);
        let report = Report {
            input: &input,
            result: calculate(&input).unwrap(),
            advisory: WASTE_ADVISORY,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"]["tile"], "600x600 mm");
        assert_eq!(json["result"]["tiles_needed"], 27.8);
        assert_eq!(json["advisory"], WASTE_ADVISORY);
    }
}
