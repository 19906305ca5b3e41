//! Interactive prompts for running without flags.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use tilecalc_core::calculations::ui_bounds;
use tilecalc_core::{AreaUnit, MaterialRates, TileMaterialsInput, TileSize};

/// Print `prompt` and read one trimmed line from stdin.
fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}

fn default_area(unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeters => ui_bounds::DEFAULT_AREA_SQM,
        AreaUnit::SquareFeet => ui_bounds::DEFAULT_AREA_SQFT,
    }
}

/// Parse a number, falling back to `default` on empty or unparsable input.
fn parse_f64_or(line: &str, default: f64) -> f64 {
    line.parse().unwrap_or(default)
}

/// Parse a 1-based menu choice, falling back to the first option.
fn parse_choice<T: Copy>(line: &str, options: &[T]) -> T {
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .unwrap_or(options[0])
}

fn prompt_f64(prompt: &str, default: f64) -> anyhow::Result<f64> {
    Ok(parse_f64_or(&read_line(prompt)?, default))
}

fn prompt_choice<T: Copy + std::fmt::Display>(title: &str, options: &[T]) -> anyhow::Result<T> {
    println!("{}", title);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    let line = read_line(&format!("Choice [1-{}, default 1]: ", options.len()))?;
    Ok(parse_choice(&line, options))
}

/// Values already supplied on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Answered {
    pub tile: Option<TileSize>,
    pub unit: Option<AreaUnit>,
    pub area: Option<f64>,
    /// Defaults offered for the material rates
    pub rates: MaterialRates,
}

/// Walk the user through tile, area and rates, skipping anything answered.
pub fn interactive_input(answered: Answered) -> anyhow::Result<TileMaterialsInput> {
    println!("Vinyl Tile Material Calculator");
    println!("==============================");
    println!();

    let tile = match answered.tile {
        Some(tile) => tile,
        None => prompt_choice("1. Tile size:", &TileSize::ALL)?,
    };

    println!();
    let unit = match answered.unit {
        Some(unit) => unit,
        None => prompt_choice("2. Area unit:", &AreaUnit::ALL)?,
    };
    let area = match answered.area {
        Some(area) => area,
        None => {
            let fallback = default_area(unit);
            prompt_f64(
                &format!("Enter area in {} [{}]: ", unit.display_name().to_lowercase(), fallback),
                fallback,
            )?
        }
    };
    let rates = answered.rates;

    println!();
    println!("3. Material rates (press Enter to keep defaults)");
    let wire = prompt_f64(
        &format!("Copper wire (meters per sqm) [{}]: ", rates.copper_wire_m_per_sqm),
        rates.copper_wire_m_per_sqm,
    )?;
    let adhesive = prompt_f64(
        &format!("Adhesive coverage (sqm per 15kg bucket) [{}]: ", rates.adhesive_sqm_per_bucket),
        rates.adhesive_sqm_per_bucket,
    )?;
    println!();

    Ok(TileMaterialsInput::new(tile, area, unit).with_rates(MaterialRates::new(wire, adhesive)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_or() {
        assert_eq!(parse_f64_or("12.5", 10.0), 12.5);
        assert_eq!(parse_f64_or("", 10.0), 10.0);
        assert_eq!(parse_f64_or("abc", 100.0), 100.0);
    }

    #[test]
    fn test_default_area_follows_unit() {
        assert_eq!(default_area(AreaUnit::SquareMeters), 10.0);
        assert_eq!(default_area(AreaUnit::SquareFeet), 100.0);
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2", &TileSize::ALL), TileSize::Mm610);
        assert_eq!(parse_choice("3", &TileSize::ALL), TileSize::Mm900);
        assert_eq!(parse_choice("", &TileSize::ALL), TileSize::Mm600);
        assert_eq!(parse_choice("0", &TileSize::ALL), TileSize::Mm600);
        assert_eq!(parse_choice("9", &AreaUnit::ALL), AreaUnit::SquareMeters);
    }
}
