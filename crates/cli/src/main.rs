mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    //  Logging (stderr, so stdout only carries command output)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,hf_models=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();

    match args.command {
        cli::Commands::ListModels(a) => cli::list_models::execute(args.global, a).await,
        cli::Commands::ModelInfo(a) => cli::model_info::execute(args.global, a).await,
        cli::Commands::Quants(a) => cli::quants::execute(args.global, a).await,
        cli::Commands::Config(c) => cli::config_cmd::execute(c).await,
    }
}
