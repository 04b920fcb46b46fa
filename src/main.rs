//! Stellar curator CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stellar_curator::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ParseIssues => {
            stellar_curator::cli::commands::parse_issues::execute(&cli.config).await
        }
        Commands::CheckSites => {
            stellar_curator::cli::commands::check_sites::execute(&cli.config).await
        }
    };

    if let Err(err) = result {
        stellar_curator::cli::handle_error(&err);
    }
}
