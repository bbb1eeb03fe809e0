//! Error types.
//!
//! Every error is fatal: the run stops at the first one and the binary exits
//! non-zero. The top-level [`Error`] wraps one enum per pipeline stage so the
//! CLI can attach a hint based on where the run failed.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Malformed invocation, detected before any remote call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("both --secret and --output must be provided")]
    MissingInputs,

    #[error("the number of secrets ({secrets}) and output files ({outputs}) must match")]
    LengthMismatch { secrets: usize, outputs: usize },
}

/// Remote lookup failure.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("error retrieving secret {id}: secret not found")]
    NotFound { id: String },

    #[error("error retrieving secret {id}: {message}")]
    Remote { id: String, message: String },
}

impl FetchError {
    /// Identifier of the secret that could not be fetched.
    pub fn id(&self) -> &str {
        match self {
            Self::NotFound { id } | Self::Remote { id, .. } => id,
        }
    }
}

/// The fetched payload lacked the requested kind, or the write failed.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("secret {0} has no binary data")]
    NoBinaryData(String),

    #[error("secret {0} has no string data")]
    NoStringData(String),

    #[error("error writing secret {id} to {}: {source}", .path.display())]
    Write {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The secret source could not be set up.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("no secret backend compiled in. Rebuild with: cargo install secrets-to-file --features aws")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
