//! Writing fetched secrets to disk.
//!
//! The file is created or truncated in place. There is no temp file and no
//! rename, so an interrupted write can leave a partial file behind.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::types::{PayloadKind, SecretPayload};
use crate::error::{MaterializeError, Result};

/// Write the `kind` part of `payload` to `output`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// - `MaterializeError::NoBinaryData` / `NoStringData` if the payload does not
///   carry the requested kind. No file is created in that case.
/// - `MaterializeError::Write` if the file cannot be opened or written.
pub fn materialize(
    payload: &SecretPayload,
    kind: PayloadKind,
    id: &str,
    output: &Path,
) -> Result<usize> {
    let bytes = payload.bytes_for(kind).ok_or_else(|| match kind {
        PayloadKind::Binary => MaterializeError::NoBinaryData(id.to_string()),
        PayloadKind::Text => MaterializeError::NoStringData(id.to_string()),
    })?;

    write_file(output, bytes).map_err(|source| MaterializeError::Write {
        id: id.to_string(),
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        secret = %id,
        path = %output.display(),
        kind = %kind,
        bytes = bytes.len(),
        sha256 = %digest_prefix(bytes),
        "wrote secret"
    );
    Ok(bytes.len())
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = open_truncated(path)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(unix)]
fn open_truncated(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(super::constants::OUTPUT_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// First 12 hex chars of the SHA-256 of `bytes`, for comparing runs in logs.
fn digest_prefix(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .take(6)
        .map(|b| format!("{:02x}", b))
        .collect()
}
