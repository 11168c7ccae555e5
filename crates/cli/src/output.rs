use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}' (expected: human, json)"),
        }
    }
}

pub fn print_schedule(merged: &[[i64; 2]], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(merged)?),
        OutputFormat::Human => {
            for [start, end] in merged {
                println!("  [{start}, {end}]");
            }
        }
    }
    Ok(())
}
