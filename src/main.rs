//! component-builder command line interface
//!
//! Thin wrapper over the library: parses arguments, sets up logging and runs
//! the requested build on a single-threaded runtime.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Log filter used when `RUST_LOG` is not set
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Send structured logs to stderr so stdout only carries bundles
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scripts => commands::build::scripts(cli.dir).await,
        Commands::Styles => commands::build::styles(cli.dir).await,
        Commands::Build(args) => commands::build::run(cli.dir, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
