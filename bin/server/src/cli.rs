use clap::Parser;

use crate::opts::{HttpOpts, UpstreamOpts};

#[derive(Parser, Debug)]
#[clap(
    name = "textpolish",
    version,
    rename_all = "kebab-case",
    rename_all_env = "screaming-snake"
)]
pub struct Cli {
    /// Tokio worker threads (optional override)
    #[arg(long, env = "TEXTPOLISH_WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    /// Subcommands
    #[clap(subcommand)]
    pub subcommand: Commands,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server
    Http {
        #[clap(flatten)]
        http: HttpOpts,

        #[clap(flatten)]
        upstream: UpstreamOpts,
    },
}

impl Cli {
    pub fn create_runtime(
        worker_threads: Option<usize>,
    ) -> anyhow::Result<tokio::runtime::Runtime> {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        if let Some(n) = worker_threads {
            builder.worker_threads(n);
        }
        builder.enable_all().build().map_err(Into::into)
    }
}
