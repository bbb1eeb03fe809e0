//! Run configuration.
//!
//! Built once in `main` from the parsed command line and passed by reference
//! into the pipeline. Nothing below this point reads flags or the environment.

use std::path::PathBuf;

use crate::core::types::PayloadKind;

/// Everything a single run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Secret names or ARNs, in order.
    pub secrets: Vec<String>,
    /// Output paths, paired with `secrets` by position.
    pub outputs: Vec<PathBuf>,
    /// Payload kind applied to every secret.
    pub kind: PayloadKind,
    /// Overrides for the AWS client.
    pub aws: AwsSettings,
}

/// Optional overrides on top of the default AWS provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl RunConfig {
    pub fn new(secrets: Vec<String>, outputs: Vec<PathBuf>, kind: PayloadKind) -> Self {
        Self {
            secrets,
            outputs,
            kind,
            aws: AwsSettings::default(),
        }
    }

    pub fn with_aws(mut self, aws: AwsSettings) -> Self {
        self.aws = aws;
        self
    }
}

impl AwsSettings {
    /// Drop blank values so an empty env var behaves like an unset one.
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            region: keep(self.region),
            endpoint_url: keep(self.endpoint_url),
        }
    }
}
