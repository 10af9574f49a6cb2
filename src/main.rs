use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use trainlog::{dispatch, logging, TrainingMetrics};

/// trainlog - Workout Statistics CLI
///
/// Computes distance, mean speed and calories burned from sensor-derived
/// readings for running, walking and swimming workouts.
#[derive(Parser)]
#[command(name = "trainlog")]
#[command(version = "0.1.0")]
#[command(about = "Workout Statistics CLI", long_about = None)]
struct Cli {
    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summaries for the built-in sample sensor packages
    Report {
        /// Emit one JSON object per workout instead of text lines
        #[arg(long)]
        json: bool,
    },

    /// Compute one workout summary from positional sensor values
    Calc {
        /// Workout code (SWM, RUN or WLK)
        code: String,

        /// Sensor values: units, duration_hours, weight_kg, then per code
        /// height_cm (WLK) or pool_length_m and pool_lengths_count (SWM)
        #[arg(required = true)]
        values: Vec<Decimal>,
    },
}

/// The fixed sample packages reported by `trainlog report`
fn sample_packages() -> Vec<(&'static str, Vec<Decimal>)> {
    vec![
        ("SWM", vec![dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]),
        ("RUN", vec![dec!(15000), dec!(1), dec!(75)]),
        ("WLK", vec![dec!(9000), dec!(1), dec!(75), dec!(180)]),
    ]
}

fn run_report(json: bool) -> Result<()> {
    for (code, data) in sample_packages() {
        let workout = dispatch::read_package(code, &data)?;
        let summary = workout.summary();
        info!(code, "computed workout summary");
        if json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!("{}", summary);
        }
    }
    Ok(())
}

fn run_calc(code: &str, values: &[Decimal]) -> Result<()> {
    match dispatch::read_package(code, values) {
        Ok(workout) => {
            println!("{}", workout.summary());
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.user_message().red());
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Report { json } => run_report(json),
        Commands::Calc { code, values } => run_calc(&code, &values),
    }
}
