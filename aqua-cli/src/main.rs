//! AquaPredict CLI - run the water-quality predictor and print the sample
//! datasets from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqua-cli",
    version,
    about = "AquaPredict water-quality toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqua_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting aqua-cli");
    aqua_cmd::run(cli.command).await
}
