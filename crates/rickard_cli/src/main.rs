//! Rickard CLI - Command-line fault classification tool
//!
//! Provides subcommands for:
//! - `classify`: Classify a (dip, pitch) pair into a named fault sector
//! - `render`: Write the classification diagram as a PNG image
//! - `prompt`: Read dip and pitch interactively from standard input
//! - `table`: Print the full 22-sector fault-name table

use anyhow::Result;
use clap::{Parser, Subcommand};

mod classify;
mod prompt;
mod render;

#[derive(Parser, Debug)]
#[command(name = "rickard_cli")]
#[command(about = "Classify fault orientations on the Rickard (1972) diagram", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a (dip, pitch) pair and print sector and fault name
    Classify(classify::ClassifyArgs),
    /// Classify a (dip, pitch) pair and render the diagram to a PNG image
    Render(render::RenderArgs),
    /// Read dip and pitch from standard input, then classify
    Prompt(prompt::PromptArgs),
    /// Print the 22-sector fault-name table
    Table(classify::TableArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => classify::run_classify(args),
        Commands::Render(args) => render::run_render(args),
        Commands::Prompt(args) => prompt::run_prompt(args),
        Commands::Table(args) => classify::run_table(args),
    }
}
