use crate::tracing::{LogLevel, TracingConfig, TracingFormat};
use akari_notify::NotifyError;
use akari_secrets::{ENV_VAULT_ADDR, ENV_VAULT_BASE, ENV_VAULT_TOKEN, SecretError, VaultConfig};
use clap::{Args, Parser};
use miette::{Diagnostic, Report};
use std::io::{self, Write};
use thiserror::Error;

/// Exit codes for the CLI application
pub const EXIT_OK: i32 = 0;
/// CLI or configuration error exit code
pub const EXIT_CLI: i32 = 2;
/// Lookup or delivery failure exit code
pub const EXIT_FAILURE: i32 = 3;

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum CliError {
    /// Missing or unusable configuration (exit code 2)
    #[error("Configuration error: {message}")]
    #[diagnostic(code(akari::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Lookup, delivery or runtime failure (exit code 3)
    #[error("{message}")]
    #[diagnostic(code(akari::cli::other))]
    Other {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a new other error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new other error with help text
    #[must_use]
    pub fn other_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

impl From<SecretError> for CliError {
    fn from(err: SecretError) -> Self {
        match err {
            SecretError::NotConfigured { message } => Self::config_with_help(
                message,
                format!(
                    "Set {ENV_VAULT_ADDR} and {ENV_VAULT_TOKEN} (or pass --vault-addr / --vault-token) with a token that can read the secret"
                ),
            ),
            SecretError::InvalidPath { .. } => Self::config(err.to_string()),
            SecretError::BackendUnavailable { .. } => Self::other_with_help(
                err.to_string(),
                "Rebuild with the `vault` feature enabled",
            ),
            SecretError::Store { .. } => Self::other(err.to_string()),
        }
    }
}

impl From<NotifyError> for CliError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::Secret(inner) => inner.into(),
            NotifyError::WebhookUrlMissing { .. } => Self::config_with_help(
                err.to_string(),
                "Store the URL as a plain value or under the `webhook_url` field",
            ),
            NotifyError::Http(_) | NotifyError::Delivery { .. } => Self::other(err.to_string()),
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config { .. } => EXIT_CLI,
        CliError::Other { .. } => EXIT_FAILURE,
    }
}

/// Render an error to stderr with miette
pub fn render_error(err: &CliError) {
    let report = Report::new(err.clone());
    #[allow(clippy::print_stderr)]
    {
        eprintln!("{report:?}");
    }
    let _ = io::stderr().flush();
}

/// Build the single-threaded runtime the commands run on
///
/// # Errors
///
/// Returns [`CliError::Other`] if the runtime cannot be created.
pub fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::other(format!("Failed to create tokio runtime: {e}")))
}

/// Secret store connection flags, each backed by an environment variable
#[derive(Debug, Clone, Default, Args)]
pub struct VaultArgs {
    /// Vault server URL
    #[arg(long, env = ENV_VAULT_ADDR)]
    pub vault_addr: Option<String>,

    /// Vault token with read access
    #[arg(long, env = ENV_VAULT_TOKEN, hide_env_values = true)]
    pub vault_token: Option<String>,

    /// Base path relative secret paths are joined onto [default: secret/data/akari-value]
    #[arg(long, env = ENV_VAULT_BASE)]
    pub vault_base: Option<String>,
}

impl VaultArgs {
    /// Turn the flags into a connection config
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::NotConfigured`] when the address or token is missing.
    pub fn config(&self) -> Result<VaultConfig, SecretError> {
        VaultConfig::from_parts(
            self.vault_addr.clone(),
            self.vault_token.clone(),
            self.vault_base.clone(),
        )
    }
}

/// Logging flags
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Minimum level written to stderr (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log line format
    #[arg(long, value_enum, default_value_t = TracingFormat::Compact)]
    pub log_format: TracingFormat,
}

impl LogArgs {
    /// Tracing setup for these flags
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig {
            format: self.log_format.clone(),
            level: self.log_level.clone().into(),
            filter: None,
        }
    }
}

/// `vault-get`: print one secret as JSON
#[derive(Debug, Parser)]
#[command(name = "vault-get", version)]
#[command(about = "Fetch a secret below the Vault base path and print it as JSON")]
pub struct VaultGetCli {
    /// Secret path relative to the base path (e.g. slack/webhook_url)
    pub path: String,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub vault: VaultArgs,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub log: LogArgs,
}

/// `notify-slack`: post a message to the Slack webhook stored in Vault
#[derive(Debug, Parser)]
#[command(name = "notify-slack", version)]
#[command(about = "Send a message to Slack using the incoming webhook stored in Vault")]
pub struct NotifySlackCli {
    /// Message text; multiple words are joined with single spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Channel override, takes precedence over the slack/channel secret
    #[arg(long, env = "SLACK_CHANNEL")]
    pub channel: Option<String>,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub vault: VaultArgs,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub log: LogArgs,
}
