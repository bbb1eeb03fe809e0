//! secrets-to-file - Fetch secrets from AWS Secrets Manager into files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secrets_to_file::cli::output;
use secrets_to_file::cli::{execute, Cli};
use secrets_to_file::core::constants::LOG_ENV;
use secrets_to_file::error::{Error, FetchError, MaterializeError, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secrets_to_file=debug")
        } else {
            EnvFilter::new("secrets_to_file=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Validation(ValidationError::MissingInputs) => {
                Some("pass at least one --secret and one --output")
            }
            Error::Validation(ValidationError::LengthMismatch { .. }) => {
                Some("pass exactly one --output per --secret")
            }
            Error::Fetch(FetchError::NotFound { .. }) => {
                Some("check the secret name/ARN and the AWS region")
            }
            Error::Materialize(MaterializeError::NoBinaryData(_)) => {
                Some("if the secret stores a string, drop --binary")
            }
            Error::Materialize(MaterializeError::NoStringData(_)) => {
                Some("if the secret stores binary data, pass --binary")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
