//! Interactive prompt front-end reading dip and pitch from standard input.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use rickard::{classify_fault, save_diagram_png, DiagramOptions};

use crate::classify::parse_convention;

#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Projection convention: rickard, polar or kite
    #[arg(short, long, default_value = "kite")]
    pub convention: String,

    /// Optional PNG path for the rendered diagram
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn read_angle(prompt: &str, input: &mut impl BufRead) -> Result<f64> {
    print!("{}", prompt);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if n == 0 {
        anyhow::bail!("Unexpected end of input");
    }
    line.trim()
        .parse::<f64>()
        .with_context(|| format!("Not a number: {:?}", line.trim()))
}

pub fn run_prompt(args: PromptArgs) -> Result<()> {
    let convention = parse_convention(&args.convention)?;

    println!("=== Rickard Fault Classification (1972) ===");
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let dip = read_angle("Dip (0-90): ", &mut input)?;
    let pitch = read_angle("Pitch/rake (0-90): ", &mut input)?;

    let result = classify_fault(dip, pitch, convention);

    println!();
    println!("Result:");
    println!("  Sector:     {}", result.sector);
    println!("  Fault name: {}", result.fault_name);
    println!(
        "  Plot XY:    ({:.3}, {:.3})",
        result.point.x, result.point.y
    );

    if let Some(path) = &args.output {
        let options = DiagramOptions::default();
        save_diagram_png(&result, &options, path)
            .with_context(|| format!("Failed to write diagram to {:?}", path))?;
        println!("  Diagram:    {}", path.display());
    }

    Ok(())
}
