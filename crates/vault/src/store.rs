//! `HashiCorp` Vault KV v2 store

use akari_secrets::{SecretError, SecretSession, SecretStore, SecretValue, VaultConfig};
use async_trait::async_trait;
use rustify::errors::ClientError as RestError;
use tracing::debug;
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::error::ClientError;

/// Split a full KV v2 API path into `(mount, path)`.
///
/// `secret/data/app/key` and `secret/app/key` both map to `("secret", "app/key")`:
/// the `data/` segment is part of the HTTP route, not of the secret's name.
///
/// # Errors
///
/// Returns [`SecretError::InvalidPath`] if no secret path remains after the mount.
pub fn kv2_location(full_path: &str) -> Result<(&str, &str), SecretError> {
    let invalid = |message: &str| SecretError::InvalidPath {
        path: full_path.to_string(),
        message: message.to_string(),
    };

    let trimmed = full_path.trim_matches('/');
    let (mount, rest) = trimmed
        .split_once('/')
        .ok_or_else(|| invalid("expected <mount>/<path>"))?;
    let path = rest.strip_prefix("data/").unwrap_or(rest);

    if mount.is_empty() || path.is_empty() || path == "data" {
        return Err(invalid("expected <mount>/<path>"));
    }

    Ok((mount, path))
}

/// Reads secrets from `HashiCorp` Vault over its HTTP API.
///
/// Holds only the configuration. A new client is built for every session,
/// so nothing is pooled between lookups.
#[derive(Debug, Clone)]
pub struct VaultStore {
    config: VaultConfig,
}

impl VaultStore {
    /// Create a store for the given connection settings
    #[must_use]
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<VaultClient, SecretError> {
        let address = self.config.address();
        if !(address.starts_with("http://") || address.starts_with("https://")) {
            return Err(SecretError::not_configured(format!(
                "VAULT_ADDR '{address}' is not an http(s) URL"
            )));
        }

        let settings = VaultClientSettingsBuilder::default()
            .address(address)
            .token(self.config.expose_token())
            .build()
            .map_err(|e| SecretError::not_configured(format!("Failed to build Vault client: {e}")))?;

        VaultClient::new(settings)
            .map_err(|e| SecretError::not_configured(format!("Failed to create Vault client: {e}")))
    }
}

#[async_trait]
impl SecretStore for VaultStore {
    fn provider_name(&self) -> &'static str {
        "vault"
    }

    async fn connect(&self) -> Result<Box<dyn SecretSession>, SecretError> {
        debug!(address = %self.config.address(), "Opening Vault session");
        Ok(Box::new(VaultSession {
            client: self.client()?,
        }))
    }
}

struct VaultSession {
    client: VaultClient,
}

#[async_trait]
impl SecretSession for VaultSession {
    /// Decided by the status of a token self-lookup alone.
    ///
    /// A 2xx body that does not fit vaultrs' lookup schema still counts:
    /// tokens without a lease (root and dev-server tokens) omit `issue_time`
    /// and `renewable`.
    async fn is_authenticated(&self) -> Result<bool, SecretError> {
        match vaultrs::token::lookup_self(&self.client).await {
            Ok(_)
            | Err(ClientError::RestClientError {
                source: RestError::ResponseParseError { .. },
            }) => Ok(true),
            Err(
                ClientError::APIError { code: 403, .. }
                | ClientError::RestClientError {
                    source: RestError::ServerResponseError { code: 403, .. },
                },
            ) => Ok(false),
            Err(e) => Err(SecretError::store("auth/token/lookup-self", e)),
        }
    }

    async fn read(&self, full_path: &str) -> Result<SecretValue, SecretError> {
        let (mount, path) = kv2_location(full_path)?;
        debug!(%mount, %path, "Reading Vault KV v2 secret");

        // kv2::read unwraps the {"data": {"data": ..., "metadata": ...}} envelope
        let data: serde_json::Value = vaultrs::kv2::read(&self.client, mount, path)
            .await
            .map_err(|e| SecretError::store(full_path, e))?;

        Ok(SecretValue::from_json(data))
    }
}
