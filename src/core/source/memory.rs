//! In-memory secret source for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::SecretSource;
use crate::core::types::SecretPayload;
use crate::error::{FetchError, Result};

/// Fixed set of secrets plus a record of every fetch.
///
/// Ids not present fail with `FetchError::NotFound`; ids registered with
/// [`StaticSource::fail`] fail with `FetchError::Remote`.
#[derive(Debug, Default)]
pub struct StaticSource {
    secrets: HashMap<String, SecretPayload>,
    failures: HashMap<String, String>,
    calls: Cell<usize>,
    log: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, payload: SecretPayload) -> Self {
        self.secrets.insert(id.to_string(), payload);
        self
    }

    pub fn fail(mut self, id: &str, message: &str) -> Self {
        self.failures.insert(id.to_string(), message.to_string());
        self
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Ids fetched, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl SecretSource for StaticSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, id: &str) -> Result<SecretPayload> {
        self.calls.set(self.calls.get() + 1);
        self.log.borrow_mut().push(id.to_string());

        if let Some(message) = self.failures.get(id) {
            return Err(FetchError::Remote {
                id: id.to_string(),
                message: message.clone(),
            }
            .into());
        }

        self.secrets
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { id: id.to_string() }.into())
    }
}
