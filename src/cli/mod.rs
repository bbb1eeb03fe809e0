//! Command-line interface.

pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::config::{AwsSettings, RunConfig};
use crate::core::pipeline::Pipeline;
use crate::core::source;
use crate::core::types::PayloadKind;
use crate::core::validation;
use crate::error::Result;

/// Retrieve secrets from AWS Secrets Manager and write each one to a file.
///
/// Secrets and outputs pair up by position: the first --secret is written to
/// the first --output, and so on.
#[derive(Parser, Debug)]
#[command(
    name = "secrets-to-file",
    about = "Retrieve secrets from AWS Secrets Manager and write them to files",
    version,
    after_help = "Example:\n  secrets-to-file -s prod/db -o db.txt -s prod/tls -o tls.p12 --binary"
)]
pub struct Cli {
    /// The ID or ARN of a secret (repeatable, or comma-separated)
    #[arg(short, long = "secret", env = "SECRET", value_delimiter = ',', value_name = "ID")]
    pub secrets: Vec<String>,

    /// The path of an output file (repeatable, or comma-separated)
    #[arg(short, long = "output", env = "OUTPUT", value_delimiter = ',', value_name = "PATH")]
    pub outputs: Vec<PathBuf>,

    /// Write SecretBinary instead of SecretString
    #[arg(long, env = "BINARY", value_parser = clap::builder::BoolishValueParser::new())]
    pub binary: bool,

    /// AWS region (defaults to the provider chain)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Custom Secrets Manager endpoint URL
    #[arg(long, env = "SECRETS_TO_FILE_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        RunConfig::new(
            cli.secrets.clone(),
            cli.outputs.clone(),
            PayloadKind::from_binary_flag(cli.binary),
        )
        .with_aws(AwsSettings {
            region: cli.region.clone(),
            endpoint_url: cli.endpoint_url.clone(),
        })
    }
}

/// Run the fetch-and-write pipeline for a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = RunConfig::from(cli);
    // Reject malformed invocations before any backend is opened.
    validation::validate(&config.secrets, &config.outputs)?;
    let source = source::open(&config)?;

    let count = Pipeline::new(source.as_ref()).run(&config, |written| {
        output::success(&format!(
            "secret {} has been written to {}",
            output::key(&written.id),
            output::path(&written.output.display().to_string())
        ));
    })?;

    debug!(count, "all secrets written");
    Ok(())
}
