//! Classify and table subcommands.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use rickard::{classify_fault, Classification, Convention, FAULT_NAMES};

/// Parse a convention name, listing the accepted values on failure.
pub fn parse_convention(s: &str) -> Result<Convention> {
    Convention::from_str(s).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown convention: {:?}. Expected one of: rickard, polar, kite",
            s
        )
    })
}

pub fn print_classification_human(result: &Classification) {
    println!("=== Rickard Fault Classification (1972) ===");
    println!("Convention: {}", result.convention);
    println!("Sector:     {}", result.sector);
    println!("Fault name: {}", result.fault_name);
    println!(
        "Plot XY:    ({:.4}, {:.4})",
        result.point.x, result.point.y
    );
}

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Dip angle in degrees
    #[arg(short, long)]
    pub dip: f64,

    /// Pitch/rake angle in degrees (0-90)
    #[arg(short, long)]
    pub pitch: f64,

    /// Projection convention: rickard, polar or kite
    #[arg(short, long, default_value = "rickard")]
    pub convention: String,

    /// Output as JSON for machine parsing
    #[arg(long)]
    pub json: bool,
}

pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let convention = parse_convention(&args.convention)?;
    let result = classify_fault(args.dip, args.pitch, convention);
    log::debug!(
        "dip={} pitch={} convention={} -> sector {}",
        args.dip,
        args.pitch,
        convention,
        result.sector
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize to JSON")?
        );
    } else {
        print_classification_human(&result);
    }

    Ok(())
}

#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TableRow {
    sector: u32,
    fault_name: &'static str,
}

pub fn run_table(args: TableArgs) -> Result<()> {
    if args.json {
        let rows: Vec<TableRow> = FAULT_NAMES
            .iter()
            .enumerate()
            .map(|(i, &name)| TableRow {
                sector: i as u32 + 1,
                fault_name: name,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize to JSON")?
        );
    } else {
        println!("=== Rickard (1972) Fault Sectors ===");
        for (i, name) in FAULT_NAMES.iter().enumerate() {
            println!("  [{:>2}] {}", i + 1, name);
        }
    }

    Ok(())
}
