use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod error;

use error::CommandError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
pub fn run() -> Result<()> {
    init_tracing();

    // Global usage errors, --help and --version are handled by clap itself.
    let args = cli::Args::parse();

    let message = match commands::execute(&args) {
        Ok(message) => message,
        Err(CommandError::Usage(err)) => err.exit(),
        Err(err @ CommandError::UnknownCommand { .. }) => {
            // The unknown-command notice goes to stdout, the exit code to main.
            println!("{err}");
            return Err(err).context("failed to execute command");
        }
    };
    println!("{message}");
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
