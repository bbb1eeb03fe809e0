//! Domain types for a run.
//!
//! All of these live for a single invocation and are never persisted.

use std::fmt;
use std::path::PathBuf;

use zeroize::Zeroizing;

/// A secret name or ARN, passed to the service as-is.
pub type SecretId = String;

/// One unit of work: fetch `id`, write it to `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRequest {
    pub id: SecretId,
    pub output: PathBuf,
}

/// Which field of the secret a run writes out.
///
/// Chosen once per run and applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadKind {
    #[default]
    Text,
    Binary,
}

impl PayloadKind {
    pub fn from_binary_flag(binary: bool) -> Self {
        if binary {
            Self::Binary
        } else {
            Self::Text
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value returned by one fetch.
///
/// Buffers are wiped when dropped. Empty strings and empty blobs are treated
/// as absent, so `Text` and `Binary` always hold at least one byte.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretPayload {
    Text(Zeroizing<String>),
    Binary(Zeroizing<Vec<u8>>),
    /// The service reported both fields.
    Both {
        text: Zeroizing<String>,
        binary: Zeroizing<Vec<u8>>,
    },
    Empty,
}

impl SecretPayload {
    /// Build a payload from the two optional fields a secret value carries.
    pub fn from_parts(text: Option<String>, binary: Option<Vec<u8>>) -> Self {
        let text = text.filter(|t| !t.is_empty()).map(Zeroizing::new);
        let binary = binary.filter(|b| !b.is_empty()).map(Zeroizing::new);

        match (text, binary) {
            (Some(text), Some(binary)) => Self::Both { text, binary },
            (Some(text), None) => Self::Text(text),
            (None, Some(binary)) => Self::Binary(binary),
            (None, None) => Self::Empty,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::from_parts(Some(value.into()), None)
    }

    pub fn binary(value: impl Into<Vec<u8>>) -> Self {
        Self::from_parts(None, Some(value.into()))
    }

    /// Bytes to write for `kind`, if the payload carries that kind.
    pub fn bytes_for(&self, kind: PayloadKind) -> Option<&[u8]> {
        match (self, kind) {
            (Self::Text(text), PayloadKind::Text)
            | (Self::Both { text, .. }, PayloadKind::Text) => Some(text.as_bytes()),
            (Self::Binary(binary), PayloadKind::Binary)
            | (Self::Both { binary, .. }, PayloadKind::Binary) => Some(binary.as_slice()),
            (Self::Text(_), PayloadKind::Binary)
            | (Self::Binary(_), PayloadKind::Text)
            | (Self::Empty, _) => None,
        }
    }

    /// Short label for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
            Self::Both { .. } => "text+binary",
            Self::Empty => "empty",
        }
    }
}

// Never print secret contents.
impl fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "Text(<{} bytes>)", text.len()),
            Self::Binary(binary) => write!(f, "Binary(<{} bytes>)", binary.len()),
            Self::Both { text, binary } => write!(
                f,
                "Both {{ text: <{} bytes>, binary: <{} bytes> }}",
                text.len(),
                binary.len()
            ),
            Self::Empty => f.write_str("Empty"),
        }
    }
}
