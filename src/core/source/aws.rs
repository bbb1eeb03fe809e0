//! AWS Secrets Manager source.
//!
//! Enable with `--features aws` (default).
//!
//! Credentials and region come from the default provider chain
//! (environment, shared config/credentials files, SSO, instance metadata).
//! `--region` and `--endpoint-url` override the chain when given.
//!
//! The SDK is async; a current-thread runtime owned by the source drives it
//! with `block_on`, so each fetch is a single blocking call. The client is
//! built on the first fetch and reused for the rest of the run.

use std::cell::OnceCell;

use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::SecretSource;
use crate::config::AwsSettings;
use crate::core::types::SecretPayload;
use crate::error::{ClientError, FetchError, Result};

/// Secret source backed by AWS Secrets Manager.
pub struct SecretsManager {
    settings: AwsSettings,
    runtime: tokio::runtime::Runtime,
    client: OnceCell<Client>,
}

impl SecretsManager {
    /// Create the source. No credentials are resolved until the first fetch.
    pub fn new(settings: AwsSettings) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientError::Runtime)?;

        Ok(Self {
            settings: settings.normalized(),
            runtime,
            client: OnceCell::new(),
        })
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(|| {
            debug!(
                region = ?self.settings.region,
                endpoint_url = ?self.settings.endpoint_url,
                "loading AWS configuration"
            );
            self.runtime.block_on(connect(&self.settings))
        })
    }
}

async fn connect(settings: &AwsSettings) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = settings.region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    let shared = loader.load().await;

    let mut builder = aws_sdk_secretsmanager::config::Builder::from(&shared);
    if let Some(endpoint) = settings.endpoint_url.as_deref() {
        builder = builder.endpoint_url(endpoint);
    }
    Client::from_conf(builder.build())
}

impl SecretSource for SecretsManager {
    fn name(&self) -> &'static str {
        "aws-secrets-manager"
    }

    fn fetch(&self, id: &str) -> Result<SecretPayload> {
        let client = self.client();
        trace!(secret = %id, "GetSecretValue");

        let output = self
            .runtime
            .block_on(client.get_secret_value().secret_id(id).send())
            .map_err(|err| {
                let message = DisplayErrorContext(&err).to_string();
                let service = err.into_service_error();
                if service.is_resource_not_found_exception() {
                    FetchError::NotFound { id: id.to_string() }
                } else {
                    FetchError::Remote {
                        id: id.to_string(),
                        message,
                    }
                }
            })?;

        let payload = SecretPayload::from_parts(
            output.secret_string().map(str::to_owned),
            output.secret_binary().map(|blob| blob.as_ref().to_vec()),
        );
        trace!(secret = %id, shape = payload.shape(), "fetched secret");
        Ok(payload)
    }
}
