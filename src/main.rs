use std::process::ExitCode;

use clap::Parser;
use dataset_options::cli::{Cli, execute};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // .env is optional; it only ever carries RUST_LOG
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let status = execute(&cli, &mut std::io::stdout(), &mut std::io::stderr());
    ExitCode::from(status)
}
