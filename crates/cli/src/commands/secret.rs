//! `vault-get` command

use crate::cli::CliError;
use akari_secrets::SecretResolver;

/// Fetch `path` and render it as pretty-printed JSON.
///
/// # Errors
///
/// Returns the lookup failure mapped to a [`CliError`].
pub async fn execute_get(resolver: &SecretResolver, path: &str) -> Result<String, CliError> {
    let value = resolver.get_secret(path).await?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| CliError::other(format!("Failed to render secret as JSON: {e}")))
}
