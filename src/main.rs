use clap::Parser;
use prochariot::cli::{commands, output, Cli};
use prochariot::ProchariotError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging with PROCHARIOT_LOG environment variable support.
    // Logs go to stderr; stdout is reserved for JSON.
    let log_level = std::env::var("PROCHARIOT_LOG").unwrap_or_else(|_| cli.log_level().to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::analyze::run(cli.analyze) {
        output::error(&e.to_string());

        let exit_code = e
            .downcast_ref::<ProchariotError>()
            .map(ProchariotError::exit_code)
            .unwrap_or(1);
        process::exit(exit_code);
    }
}
