//! In-memory secret store

use crate::{SecretError, SecretSession, SecretStore, SecretValue};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A [`SecretStore`] backed by a map of full paths to values.
///
/// Records every session it opens and every path it reads, so tests can
/// assert on exactly what reached the "network".
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: HashMap<String, SecretValue>,
    reject_token: bool,
    sessions: AtomicUsize,
    reads: Arc<Mutex<Vec<String>>>,
}

impl MemorySecretStore {
    /// Create an empty store that accepts its token
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret at a full path (base path included)
    #[must_use]
    pub fn with_secret(mut self, full_path: impl Into<String>, value: impl Into<SecretValue>) -> Self {
        self.secrets.insert(full_path.into(), value.into());
        self
    }

    /// Make every session report an unauthenticated token
    #[must_use]
    pub fn rejecting_token(mut self) -> Self {
        self.reject_token = true;
        self
    }

    /// Number of sessions opened so far
    #[must_use]
    pub fn sessions_opened(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }

    /// Full paths read so far, in order
    #[must_use]
    pub fn reads(&self) -> Vec<String> {
        self.reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    async fn connect(&self) -> Result<Box<dyn SecretSession>, SecretError> {
        self.sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemorySession {
            secrets: self.secrets.clone(),
            authenticated: !self.reject_token,
            reads: Arc::clone(&self.reads),
        }))
    }
}

struct MemorySession {
    secrets: HashMap<String, SecretValue>,
    authenticated: bool,
    reads: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl SecretSession for MemorySession {
    async fn is_authenticated(&self) -> Result<bool, SecretError> {
        Ok(self.authenticated)
    }

    async fn read(&self, full_path: &str) -> Result<SecretValue, SecretError> {
        self.reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(full_path.to_string());

        self.secrets
            .get(full_path)
            .cloned()
            .ok_or_else(|| SecretError::store(full_path, "secret not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_known_and_unknown_paths() {
        let store = MemorySecretStore::new().with_secret("kv/app/token", "abc");
        let session = store.connect().await.unwrap();

        assert!(session.is_authenticated().await.unwrap());
        assert_eq!(
            session.read("kv/app/token").await.unwrap(),
            SecretValue::from("abc")
        );
        assert!(session.read("kv/app/other").await.is_err());
        assert_eq!(store.reads(), vec!["kv/app/token", "kv/app/other"]);
    }

    #[tokio::test]
    async fn test_rejecting_token() {
        let store = MemorySecretStore::new().rejecting_token();
        let session = store.connect().await.unwrap();
        assert!(!session.is_authenticated().await.unwrap());
        assert_eq!(store.sessions_opened(), 1);
    }

    #[test]
    fn test_blocking_use_with_tokio_test() {
        let store = MemorySecretStore::new().with_secret("p", [("k", "v")]);
        let value = tokio_test::block_on(async {
            let session = store.connect().await?;
            session.read("p").await
        })
        .unwrap();
        assert_eq!(value.field("k"), Some("v"));
    }
}
