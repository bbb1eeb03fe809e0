//! Input validation.
//!
//! Checks the shape of an invocation before anything is fetched. Contents are
//! deliberately not inspected: duplicate or empty identifiers and paths pass.

use std::path::PathBuf;

use crate::error::{Result, ValidationError};

use super::types::SecretRequest;

/// Validate that secrets and outputs are both given and pair up one-to-one.
///
/// # Errors
///
/// Returns `ValidationError::MissingInputs` if either list is empty, and
/// `ValidationError::LengthMismatch` if their lengths differ.
pub fn validate(secrets: &[String], outputs: &[PathBuf]) -> Result<()> {
    if secrets.is_empty() || outputs.is_empty() {
        return Err(ValidationError::MissingInputs.into());
    }

    if secrets.len() != outputs.len() {
        return Err(ValidationError::LengthMismatch {
            secrets: secrets.len(),
            outputs: outputs.len(),
        }
        .into());
    }

    Ok(())
}

/// Validate, then pair secrets with outputs by position.
pub fn pair(secrets: &[String], outputs: &[PathBuf]) -> Result<Vec<SecretRequest>> {
    validate(secrets, outputs)?;

    Ok(secrets
        .iter()
        .zip(outputs)
        .map(|(id, output)| SecretRequest {
            id: id.clone(),
            output: output.clone(),
        })
        .collect())
}
