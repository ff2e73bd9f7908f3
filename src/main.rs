mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Recommend { name, k, scores } => commands::recommend::run(&cli.source, name, *k, *scores),
        Commands::Top { n } => commands::top::run(&cli.source, *n),
        Commands::Build { out } => commands::build::run(&cli.source, out),
    }
}
