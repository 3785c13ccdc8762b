use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textpolish_server::cli::{Cli, Commands};
use textpolish_server::http;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.subcommand {
        Commands::Http { http, upstream } => {
            let runtime = Cli::create_runtime(cli.worker_threads)?;
            runtime.block_on(async move { http::run(http, upstream).await })
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
