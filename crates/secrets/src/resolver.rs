//! Relative-path secret lookups against a store

use crate::{SecretError, SecretStore, SecretValue, join_secret_path};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Resolves secrets by path relative to a configured base.
///
/// Every call opens a new session, checks it is authenticated and performs a
/// single read. Nothing is cached and failures are never retried.
#[derive(Clone)]
pub struct SecretResolver {
    store: Arc<dyn SecretStore>,
    base_path: String,
}

impl std::fmt::Debug for SecretResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretResolver")
            .field("provider", &self.store.provider_name())
            .field("base_path", &self.base_path)
            .finish()
    }
}

impl SecretResolver {
    /// Create a resolver over `store` rooted at `base_path`.
    #[must_use]
    pub fn new(store: Arc<dyn SecretStore>, base_path: impl Into<String>) -> Self {
        Self {
            store,
            base_path: base_path.into(),
        }
    }

    /// Base path relative lookups are joined onto
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Fetch the secret at `base_path/relative_path`.
    ///
    /// # Errors
    ///
    /// - [`SecretError::InvalidPath`] for an empty relative path (no session is opened)
    /// - [`SecretError::NotConfigured`] when the store rejects the credentials
    /// - [`SecretError::Store`] when the read itself fails
    #[instrument(skip(self), fields(provider = self.store.provider_name()))]
    pub async fn get_secret(&self, relative_path: &str) -> Result<SecretValue, SecretError> {
        let full_path = join_secret_path(&self.base_path, relative_path)?;

        let session = self.store.connect().await?;
        if !session.is_authenticated().await? {
            return Err(SecretError::not_configured(format!(
                "{} authentication failed",
                self.store.provider_name()
            )));
        }

        let value = session.read(&full_path).await?;
        debug!(path = %full_path, fields = ?value.field_names(), "Secret resolved");
        Ok(value)
    }
}
