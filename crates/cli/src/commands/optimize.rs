use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bookwise_core::merge_pairs;
use clap::Parser;

use crate::output::{print_schedule, OutputFormat};

/// Merge a schedule of bookings into its minimal form
///
/// Reads a JSON array of `[start, end]` pairs from FILE (or stdin when
/// no file is given) and prints the merged schedule.
#[derive(Debug, Parser)]
pub struct OptimizeCommand {
    /// Path to a JSON file holding the bookings (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub schedule_path: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl OptimizeCommand {
    pub fn execute(&self) -> Result<i32> {
        let format = OutputFormat::parse(&self.output)?;

        let raw = match &self.schedule_path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read bookings from stdin")?;
                buffer
            }
        };

        let pairs: Vec<[i64; 2]> = match serde_json::from_str(&raw) {
            Ok(pairs) => pairs,
            Err(error) => {
                eprintln!("invalid schedule: {error}");
                return Ok(2);
            }
        };

        let merged = match merge_pairs(&pairs) {
            Ok(merged) => merged,
            Err(error) => {
                eprintln!("invalid schedule: {error}");
                return Ok(2);
            }
        };

        if format == OutputFormat::Human {
            println!("{} bookings merged into {}:", pairs.len(), merged.len());
        }
        print_schedule(&merged, format)?;
        Ok(0)
    }
}
