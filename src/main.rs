use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apexgate::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apexgate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init(),
        Commands::Bootstrap => cli::commands::bootstrap(),
        Commands::Users { format } => cli::commands::users(format),
        Commands::Routes { format } => cli::commands::routes(format),
        Commands::Check { page, email, role } => cli::commands::check(&page, email, role),
        Commands::Browse { page } => cli::commands::browse(&page),
    }
}
