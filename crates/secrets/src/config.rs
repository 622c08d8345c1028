//! Connection settings for the secret store

use crate::SecretError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the Vault server URL
pub const ENV_VAULT_ADDR: &str = "VAULT_ADDR";
/// Environment variable holding a token with read access
pub const ENV_VAULT_TOKEN: &str = "VAULT_TOKEN";
/// Environment variable overriding the base secret path
pub const ENV_VAULT_BASE: &str = "VAULT_BASE";

/// Base path used when `VAULT_BASE` is not set
pub const DEFAULT_BASE_PATH: &str = "secret/data/akari-value";

/// Explicit configuration for a secret store session.
///
/// Built once at the edge of the program (environment or CLI flags) and
/// passed into the store, so nothing below reads process state.
#[derive(Clone)]
pub struct VaultConfig {
    address: String,
    token: SecretString,
    base_path: String,
}

impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("address", &self.address)
            .field("token", &"[REDACTED]")
            .field("base_path", &self.base_path)
            .finish()
    }
}

impl VaultConfig {
    /// Build a config from optional parts.
    ///
    /// Empty strings count as missing. The base path falls back to
    /// [`DEFAULT_BASE_PATH`].
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::NotConfigured`] when the address or the token is absent.
    pub fn from_parts(
        address: Option<String>,
        token: Option<String>,
        base_path: Option<String>,
    ) -> Result<Self, SecretError> {
        let address = non_empty(address);
        let token = non_empty(token);

        let (Some(address), Some(token)) = (address, token) else {
            return Err(SecretError::not_configured(format!(
                "{ENV_VAULT_ADDR} / {ENV_VAULT_TOKEN} missing"
            )));
        };

        Ok(Self {
            address,
            token: SecretString::from(token),
            base_path: non_empty(base_path).unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
        })
    }

    /// Read `VAULT_ADDR`, `VAULT_TOKEN` and `VAULT_BASE` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::NotConfigured`] when the address or the token is absent.
    pub fn from_env() -> Result<Self, SecretError> {
        Self::from_parts(
            std::env::var(ENV_VAULT_ADDR).ok(),
            std::env::var(ENV_VAULT_TOKEN).ok(),
            std::env::var(ENV_VAULT_BASE).ok(),
        )
    }

    /// Server URL
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Access token. Callers must not log or persist the returned value.
    #[must_use]
    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Base path that relative secret paths are joined onto
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
