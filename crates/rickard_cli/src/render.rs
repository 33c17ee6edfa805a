//! Render subcommand for writing diagram PNG images.

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgba;
use std::path::PathBuf;

use rickard::{classify_fault, save_diagram_png, DiagramOptions};

use crate::classify::{parse_convention, print_classification_human};

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Dip angle in degrees
    #[arg(short, long)]
    pub dip: f64,

    /// Pitch/rake angle in degrees (0-90)
    #[arg(short, long)]
    pub pitch: f64,

    /// Projection convention: rickard, polar or kite
    #[arg(short, long, default_value = "rickard")]
    pub convention: String,

    /// Output PNG file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "800")]
    pub height: u32,

    /// Background color as hex (e.g., ffffff)
    #[arg(long, default_value = "ffffff")]
    pub background: String,

    /// Classified-point color as hex (e.g., dc1e1e)
    #[arg(long, default_value = "dc1e1e")]
    pub color: String,

    /// Hide sector numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Hide sector boundary lines
    #[arg(long)]
    pub no_sector_lines: bool,
}

fn parse_hex_color(hex: &str) -> Result<Rgba<u8>> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        anyhow::bail!("Invalid hex color: expected 6 characters, got {}", hex.len());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).context("Invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).context("Invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).context("Invalid blue component")?;
    Ok(Rgba([r, g, b, 255]))
}

pub fn run_render(args: RenderArgs) -> Result<()> {
    let convention = parse_convention(&args.convention)?;
    let background = parse_hex_color(&args.background).context("Invalid background color")?;
    let point_color = parse_hex_color(&args.color).context("Invalid point color")?;

    let result = classify_fault(args.dip, args.pitch, convention);
    print_classification_human(&result);

    let options = DiagramOptions {
        width: args.width,
        height: args.height,
        show_numbers: !args.no_numbers,
        show_sector_lines: !args.no_sector_lines,
        background,
        point_color,
        ..Default::default()
    };

    save_diagram_png(&result, &options, &args.output)
        .with_context(|| format!("Failed to write diagram to {:?}", args.output))?;
    println!("Wrote {:?}", args.output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        assert_eq!(parse_hex_color("ff0000").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(
            parse_hex_color("#336699").unwrap(),
            Rgba([51, 102, 153, 255])
        );
    }

    #[test]
    fn bad_hex_colors_are_rejected() {
        assert!(parse_hex_color("12345").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
    }
}
