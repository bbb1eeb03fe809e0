//! Secret sources.
//!
//! A [`SecretSource`] performs exactly one lookup per [`SecretSource::fetch`]
//! call and reports whatever the backend holds; choosing between text and
//! binary happens later, in materialization.
//!
//! ## Backends
//!
//! - **AWS Secrets Manager**: Feature-gated (`aws`, on by default).
//! - **Fixture directory**: Feature-gated (`test-source`). Reads
//!   `<id>.txt` / `<id>.bin` files, used by the CLI integration tests.
//! - **In-memory**: test builds and `test-source` only.

use crate::config::RunConfig;
use crate::error::Result;

use super::types::SecretPayload;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(feature = "test-source")]
pub mod fixture;

#[cfg(any(test, feature = "test-source"))]
pub mod memory;

/// Backend that can look up a secret by name or ARN.
pub trait SecretSource {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Fetch the current value of `id`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the lookup fails. No retry is attempted.
    fn fetch(&self, id: &str) -> Result<SecretPayload>;
}

/// Open the secret source for this build.
///
/// With `test-source`, a fixture directory named by `SECRETS_TO_FILE_FIXTURES`
/// takes precedence over AWS. Opening does not touch the network.
pub fn open(config: &RunConfig) -> Result<Box<dyn SecretSource>> {
    #[cfg(feature = "test-source")]
    if let Some(dir) = std::env::var_os(super::constants::FIXTURES_ENV) {
        tracing::debug!(dir = ?dir, "using fixture secret source");
        return Ok(Box::new(fixture::FixtureSource::new(dir)));
    }

    open_remote(config)
}

#[cfg(feature = "aws")]
fn open_remote(config: &RunConfig) -> Result<Box<dyn SecretSource>> {
    Ok(Box::new(aws::SecretsManager::new(config.aws.clone())?))
}

#[cfg(not(feature = "aws"))]
fn open_remote(_config: &RunConfig) -> Result<Box<dyn SecretSource>> {
    Err(crate::error::ClientError::Unavailable.into())
}
