//! Fixture-directory secret source.
//!
//! Stands in for AWS in integration tests (`--features test-source`). A secret
//! `id` is read from `<dir>/<id>.txt` (text) and `<dir>/<id>.bin` (binary);
//! a missing pair of files is reported as not found.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::SecretSource;
use crate::core::constants::{BINARY_FIXTURE_EXT, TEXT_FIXTURE_EXT};
use crate::core::types::SecretPayload;
use crate::error::{FetchError, Result};

#[derive(Debug)]
pub struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &str, ext: &str) -> PathBuf {
        let mut name = OsString::from(id);
        name.push(".");
        name.push(ext);
        self.dir.join(name)
    }
}

fn read_optional(path: &Path, id: &str) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FetchError::Remote {
            id: id.to_string(),
            message: format!("failed to read {}: {}", path.display(), e),
        }
        .into()),
    }
}

impl SecretSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn fetch(&self, id: &str) -> Result<SecretPayload> {
        let text_path = self.path_for(id, TEXT_FIXTURE_EXT);
        let binary_path = self.path_for(id, BINARY_FIXTURE_EXT);
        trace!(secret = %id, dir = %self.dir.display(), "reading fixture");

        let text = read_optional(&text_path, id)?;
        let binary = read_optional(&binary_path, id)?;
        if text.is_none() && binary.is_none() {
            return Err(FetchError::NotFound { id: id.to_string() }.into());
        }

        let text = text
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|e| FetchError::Remote {
                    id: id.to_string(),
                    message: format!("fixture is not UTF-8: {}", e),
                })
            })
            .transpose()?;

        Ok(SecretPayload::from_parts(text, binary))
    }
}
