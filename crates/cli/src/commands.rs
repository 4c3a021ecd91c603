//! Command definitions and execution.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tensorwire_wire::{decode_tensor, to_json};
use tracing::debug;

use crate::format::{format_summary, OutputMode};

#[derive(Parser)]
#[command(name = "tensorwire")]
#[command(about = "Inspect, re-encode and dispatch tensor JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show type, shape, element count and name of a tensor
    Inspect {
        /// Tensor JSON file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Re-serialize a tensor
    Encode {
        /// Tensor JSON file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Keep float64/int64 exact by sending them as base64
        #[arg(long)]
        lossless: bool,
    },

    /// Narrow a float64/int64 tensor to float32/int32
    Narrow {
        /// Tensor JSON file, or - for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Run a model on the inputs in a file
    #[cfg(feature = "http")]
    Query {
        /// Model identifier
        #[arg(long)]
        model: String,

        /// A tensor, a list of tensors, or an object of named tensors
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Client configuration file (JSON); TENSORWIRE_* variables otherwise
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Base URL of the inference service
        #[arg(long)]
        url: Option<String>,

        /// Path requests are posted to
        #[arg(long)]
        run_path: Option<String>,

        /// Per-call timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

/// Run one command and return what should be printed
pub fn execute(command: Command, mode: OutputMode) -> Result<String> {
    match command {
        Command::Inspect { input } => inspect(&read_input(&input)?, mode),
        Command::Encode { input, lossless } => encode(&read_input(&input)?, lossless),
        Command::Narrow { input } => narrow(&read_input(&input)?),
        #[cfg(feature = "http")]
        Command::Query {
            model,
            input,
            config,
            url,
            run_path,
            timeout_ms,
        } => {
            let config = query::load_config(config.as_deref(), url, run_path, timeout_ms)?;
            query::run(&model, &read_input(&input)?, config, mode)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn inspect(text: &str, mode: OutputMode) -> Result<String> {
    let tensor = decode_tensor(text)?;
    Ok(format_summary(&tensor, mode))
}

fn encode(text: &str, lossless: bool) -> Result<String> {
    let tensor = decode_tensor(text)?;
    debug!(dtype = %tensor.dtype(), lossless, "re-encoding tensor");
    let json = to_json(&tensor, lossless)?;
    Ok(serde_json::to_string_pretty(&json)?)
}

fn narrow(text: &str) -> Result<String> {
    let tensor = decode_tensor(text)?;
    let narrowed = tensor.as_32bit()?;
    let json = to_json(&narrowed, false)?;
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(feature = "http")]
mod query {
    use super::*;
    use crate::format::format_outputs;
    use tensorwire_api::{ClientConfig, HttpTransport, InferenceClient, InferenceFacade, InferenceInput};

    /// File (or environment) first, then flag overrides
    pub fn load_config(
        file: Option<&Path>,
        url: Option<String>,
        run_path: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Result<ClientConfig> {
        let mut config = match file {
            Some(path) => ClientConfig::from_json(&read_input(path)?)?,
            None => ClientConfig::from_env()?,
        };
        if let Some(url) = url {
            config = config.base_url(url);
        }
        if let Some(path) = run_path {
            config = config.run_path(path);
        }
        if let Some(ms) = timeout_ms {
            config = config.timeout_ms(ms);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn run(model: &str, text: &str, config: ClientConfig, mode: OutputMode) -> Result<String> {
        let value: serde_json::Value = serde_json::from_str(text).context("inputs are not JSON")?;
        let inputs = InferenceInput::from_value(value)?;
        let transport = HttpTransport::new(&config)?;
        let client = InferenceClient::with_config(transport, config);
        let outputs = client.run(model, inputs)?;
        Ok(format_outputs(&outputs, mode))
    }
}
