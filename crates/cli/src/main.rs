mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, OptimizeCommand};

/// Bookwise CLI - booking consolidation tool
#[derive(Debug, Parser)]
#[command(name = "bookwise", version, about = "Booking consolidation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Merge a schedule of bookings into its minimal form
    Optimize(OptimizeCommand),
    /// Generate a random schedule and merge it
    Generate(GenerateCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Optimize(cmd) => cmd.execute()?,
        Commands::Generate(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
