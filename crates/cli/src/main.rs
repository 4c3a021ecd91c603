//! tensorwire CLI - inspect, re-encode and dispatch tensor JSON files.
//!
//! ```text
//! tensorwire inspect tensor.json
//! tensorwire encode --lossless tensor.json
//! tensorwire narrow tensor.json
//! tensorwire query --model my-model inputs.json      # with feature `http`
//! ```
//!
//! A path of `-` reads from stdin.

mod commands;
mod format;

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::{execute, Cli};
use format::OutputMode;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match execute(cli.command, mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise `--log-level` applies. Logs go to stderr so
/// stdout stays machine-readable.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
