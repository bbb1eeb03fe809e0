//! The fetch-and-write pipeline.
//!
//! Validates the invocation once, then walks the (secret, output) pairs in
//! order: fetch, then write. The first error ends the run; pairs after it are
//! never attempted and files already written stay on disk.

use std::path::PathBuf;

use tracing::{debug, info_span};

use super::materialize::materialize;
use super::source::SecretSource;
use super::types::PayloadKind;
use super::validation;
use crate::config::RunConfig;
use crate::error::Result;

/// A file written by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub id: String,
    pub output: PathBuf,
    pub kind: PayloadKind,
    pub bytes: usize,
}

/// Runs a [`RunConfig`] against a secret source.
pub struct Pipeline<'a, S: SecretSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: SecretSource + ?Sized> Pipeline<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Process every pair in `config`, calling `on_written` after each file.
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns the first validation, fetch or write error. Nothing is fetched
    /// when validation fails.
    pub fn run<F>(&self, config: &RunConfig, mut on_written: F) -> Result<usize>
    where
        F: FnMut(&Written),
    {
        let requests = validation::pair(&config.secrets, &config.outputs)?;
        debug!(
            source = self.source.name(),
            count = requests.len(),
            kind = %config.kind,
            "processing secrets"
        );

        for (index, request) in requests.iter().enumerate() {
            let _span = info_span!("secret", index, id = %request.id).entered();

            let payload = self.source.fetch(&request.id)?;
            debug!(shape = payload.shape(), "fetched");

            let bytes = materialize(&payload, config.kind, &request.id, &request.output)?;

            on_written(&Written {
                id: request.id.clone(),
                output: request.output.clone(),
                kind: config.kind,
                bytes,
            });
        }

        Ok(requests.len())
    }
}
