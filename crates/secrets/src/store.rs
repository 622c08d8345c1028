//! Store capability traits

use crate::{SecretError, SecretValue};
use async_trait::async_trait;

/// A backend that can open sessions against a secret store.
///
/// Implementations are selected once at startup: the Vault client in
/// `akari-vault`, or [`MemorySecretStore`](crate::MemorySecretStore) in tests.
/// Sessions are never cached; every lookup opens a fresh one.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Short backend identifier used in logs and errors (e.g. `"vault"`).
    fn provider_name(&self) -> &'static str;

    /// Open a session with the store's credentials.
    async fn connect(&self) -> Result<Box<dyn SecretSession>, SecretError>;
}

/// One authenticated conversation with a store.
#[async_trait]
pub trait SecretSession: Send + Sync {
    /// Whether the session's credentials are accepted by the store.
    ///
    /// `Ok(false)` means the store answered and rejected the token; transport
    /// failures are returned as errors.
    async fn is_authenticated(&self) -> Result<bool, SecretError>;

    /// Read the latest version at `full_path`, returning the inner data of the
    /// store's response envelope.
    async fn read(&self, full_path: &str) -> Result<SecretValue, SecretError>;
}
