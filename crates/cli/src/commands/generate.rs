use anyhow::Result;
use bookwise_core::{merge_bookings, Booking};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::output::{print_schedule, OutputFormat};

// Day grid used by the generator: hourly slots, bookings 1-4 slots long.
const DAY_SLOTS: i64 = 24;
const MAX_BOOKING_LEN: i64 = 4;

/// Generate a random schedule and merge it
#[derive(Debug, Parser)]
pub struct GenerateCommand {
    /// Number of bookings to generate
    #[arg(long, default_value_t = 1200)]
    pub count: usize,

    /// Seed for reproducible schedules
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl GenerateCommand {
    pub fn execute(&self) -> Result<i32> {
        let format = OutputFormat::parse(&self.output)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let schedule = generate_schedule(&mut rng, self.count)?;
        let merged = merge_bookings(&schedule)?;

        if format == OutputFormat::Human {
            println!(
                "{} random bookings merged into {}:",
                schedule.len(),
                merged.len()
            );
        }
        let pairs: Vec<[i64; 2]> = merged.into_iter().map(Into::into).collect();
        print_schedule(&pairs, format)?;
        Ok(0)
    }
}

fn generate_schedule(rng: &mut StdRng, count: usize) -> Result<Vec<Booking>> {
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..DAY_SLOTS);
            let end = start + rng.gen_range(1..=MAX_BOOKING_LEN);
            Ok(Booking::new(start, end)?)
        })
        .collect()
}
