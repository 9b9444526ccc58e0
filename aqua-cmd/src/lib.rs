//! Command implementations for the AquaPredict CLI.
//!
//! Runs the dashboard's core logic natively: classify a score, run the
//! simulated prediction, and print the sample datasets.

use clap::Subcommand;
use std::io::Write;

pub mod datasets;
pub mod predict;

#[derive(Subcommand)]
pub enum Command {
    /// Map a score to its quality label
    Classify {
        /// Score to classify (any real number)
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// Run the simulated water-quality prediction
    Predict(predict::PredictArgs),

    /// Print the six-month historical sample trend
    Samples {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print contaminant readings against their safe limits
    Contaminants {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the quality-rating distribution
    Distribution {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Classify { score } => {
            let quality = aqua_core::classify(score);
            writeln!(out, "{}", quality)?;
        }
        Command::Predict(args) => predict::run_predict(&args, &mut out).await?,
        Command::Samples { json } => datasets::write_samples(&mut out, json)?,
        Command::Contaminants { json } => datasets::write_contaminants(&mut out, json)?,
        Command::Distribution { json } => datasets::write_distribution(&mut out, json)?,
    }
    out.flush()?;
    Ok(())
}
