//! Command implementations shared by the binaries

pub mod notify;
pub mod secret;

use crate::cli::{CliError, VaultArgs};
use akari_secrets::{SecretError, SecretResolver, SecretStore, VaultConfig};
use std::sync::Arc;

/// Pick the store backend compiled into this build.
///
/// # Errors
///
/// Returns [`SecretError::BackendUnavailable`] when built without the `vault` feature.
#[cfg(feature = "vault")]
pub fn open_store(config: &VaultConfig) -> Result<Arc<dyn SecretStore>, SecretError> {
    Ok(Arc::new(akari_vault::VaultStore::new(config.clone())))
}

/// Pick the store backend compiled into this build.
///
/// # Errors
///
/// Returns [`SecretError::BackendUnavailable`] when built without the `vault` feature.
#[cfg(not(feature = "vault"))]
pub fn open_store(_config: &VaultConfig) -> Result<Arc<dyn SecretStore>, SecretError> {
    Err(SecretError::BackendUnavailable {
        backend: "vault".to_string(),
    })
}

/// Build a resolver from the connection flags.
///
/// No network traffic happens here.
///
/// # Errors
///
/// Returns a configuration error when the address or token is missing.
pub fn resolver(args: &VaultArgs) -> Result<SecretResolver, CliError> {
    let config = args.config()?;
    let store = open_store(&config)?;
    Ok(SecretResolver::new(store, config.base_path()))
}
