//! `HashiCorp` Vault integration for akari
//!
//! Provides [`VaultStore`], the [`akari_secrets::SecretStore`] implementation
//! that reads Vault KV v2 secrets over HTTP.

pub mod store;

pub use store::{VaultStore, kv2_location};
