//! Secret resolution for akari
//!
//! Provides the contract for looking up secrets in a remote key-value store:
//!
//! - [`VaultConfig`]: explicit connection settings (address, token, base path)
//! - [`SecretStore`] / [`SecretSession`]: the capability a store backend implements
//! - [`SecretResolver`]: joins a relative path onto the base path, verifies the
//!   session and performs a single point lookup
//! - [`SecretValue`]: a raw string or a field map, unwrapped explicitly
//!
//! The real Vault backend lives in the `akari-vault` crate. [`MemorySecretStore`]
//! is an in-process store for tests and local runs.
//!
//! ```ignore
//! use akari_secrets::{SecretResolver, VaultConfig};
//!
//! let config = VaultConfig::from_env()?;
//! let resolver = SecretResolver::new(store, config.base_path());
//! let value = resolver.get_secret("slack/webhook_url").await?;
//! ```

mod config;
mod memory;
mod path;
mod resolver;
mod store;
mod value;

pub use config::{
    DEFAULT_BASE_PATH, ENV_VAULT_ADDR, ENV_VAULT_BASE, ENV_VAULT_TOKEN, VaultConfig,
};
pub use memory::MemorySecretStore;
pub use path::join_secret_path;
pub use resolver::SecretResolver;
pub use store::{SecretSession, SecretStore};
pub use value::SecretValue;

use thiserror::Error;

/// Boxed error from a store backend, kept as the source of [`SecretError::Store`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for secret resolution
#[derive(Debug, Error)]
pub enum SecretError {
    /// Connection information is missing or the token failed to authenticate
    #[error("Secret store not configured: {message}")]
    NotConfigured {
        /// What is missing or failed
        message: String,
    },

    /// The store client was not compiled into this build
    #[error("Secret store backend '{backend}' is not available in this build")]
    BackendUnavailable {
        /// Backend name (e.g. `"vault"`)
        backend: String,
    },

    /// Relative path is empty once slashes are trimmed
    #[error("Invalid secret path '{path}': {message}")]
    InvalidPath {
        /// The path as supplied by the caller
        path: String,
        /// Why it was rejected
        message: String,
    },

    /// The store rejected or failed the lookup (not found, HTTP error, ...)
    #[error("Failed to read secret '{path}': {source}")]
    Store {
        /// Full lookup path
        path: String,
        /// Underlying client error
        #[source]
        source: BoxError,
    },
}

impl SecretError {
    /// Create a configuration error
    #[must_use]
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    /// Wrap a backend error for the given full path
    #[must_use]
    pub fn store(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Store {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether this error is a configuration problem rather than a lookup failure
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_configured_message() {
        let err = SecretError::not_configured("VAULT_ADDR / VAULT_TOKEN missing");
        let msg = err.to_string();
        assert!(msg.contains("not configured"));
        assert!(msg.contains("VAULT_ADDR"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_backend_unavailable_message() {
        let err = SecretError::BackendUnavailable {
            backend: "vault".to_string(),
        };
        assert!(err.to_string().contains("'vault'"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_store_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "404 no such path");
        let err = SecretError::store("secret/data/app/missing", io);
        assert!(err.to_string().contains("secret/data/app/missing"));
        assert!(err.to_string().contains("404 no such path"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_path_message() {
        let err = SecretError::InvalidPath {
            path: "//".to_string(),
            message: "path is empty".to_string(),
        };
        assert!(err.to_string().contains("'//'"));
    }
}
