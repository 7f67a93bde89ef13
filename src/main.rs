//! sqlindent CLI - Re-indent a SQL statement

use clap::Parser;
use sqlindent::cli::{Cli, Outcome};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.run() {
        Ok(Outcome::Formatted(formatted)) => {
            println!("{}", formatted);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Checked { formatted: true }) => ExitCode::SUCCESS,
        Ok(Outcome::Checked { formatted: false }) => {
            eprintln!("<input>: needs formatting");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr. `--verbose` forces debug output for this crate,
/// otherwise RUST_LOG decides (default `warn`).
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sqlindent=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
