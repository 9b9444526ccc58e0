//! `predict` subcommand.

use aqua_core::prediction::{
    Immediate, InputField, PredictionInput, PredictionResult, PredictionService, Timer,
    UniformScore,
};
use clap::Args;
use log::{info, warn};
use std::io::Write;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub struct PredictArgs {
    /// pH level
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub ph: String,

    /// Turbidity in NTU
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub turbidity: String,

    /// Temperature in °C
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub temperature: String,

    /// Dissolved oxygen in mg/L
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub dissolved_oxygen: String,

    /// Sampling location
    #[arg(long, default_value = "")]
    pub location: String,

    /// Seed the score generator for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the two-second analysis delay
    #[arg(long)]
    pub no_delay: bool,

    /// Reject measurement fields that are not numbers
    #[arg(long)]
    pub strict: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    pub fn input(&self) -> PredictionInput {
        PredictionInput::default()
            .with(InputField::Ph, self.ph.as_str())
            .with(InputField::Turbidity, self.turbidity.as_str())
            .with(InputField::Temperature, self.temperature.as_str())
            .with(InputField::DissolvedOxygen, self.dissolved_oxygen.as_str())
            .with(InputField::Location, self.location.as_str())
    }
}

/// [`Timer`] backed by the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

pub async fn run_predict<W: Write>(args: &PredictArgs, out: &mut W) -> anyhow::Result<()> {
    let input = args.input();

    if args.strict {
        input.parameters()?;
    } else {
        for problem in input.parameter_errors() {
            warn!("{}; the value is ignored by the predictor", problem);
        }
    }

    let scores = match args.seed {
        Some(seed) => UniformScore::seeded(seed),
        None => UniformScore::from_os_rng(),
    };

    info!("analyzing parameters for {:?}", input.location);
    let result = if args.no_delay {
        PredictionService::new(scores, Immediate).predict(&input).await
    } else {
        PredictionService::new(scores, TokioTimer).predict(&input).await
    };

    write_result(out, &result, args.json)
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &PredictionResult,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "Score: {}/100", result.score)?;
    writeln!(out, "Quality: {}", result.quality)?;
    writeln!(out, "{}", result.summary())?;
    writeln!(out, "Recommendations:")?;
    for rec in &result.recommendations {
        writeln!(out, "  - {}", rec)?;
    }
    Ok(())
}
