//! Slack notifications for akari
//!
//! Posts messages to a Slack incoming webhook. The webhook URL, and optionally
//! the default channel, are looked up through an [`akari_secrets::SecretResolver`]
//! on every call:
//!
//! | logical path        | contents                                          |
//! |---------------------|---------------------------------------------------|
//! | `slack/webhook_url` | the URL, raw or as `{"webhook_url": "..."}`       |
//! | `slack/channel`     | channel override, raw or as `{"channel": "..."}`  |

mod payload;
mod slack;

pub use payload::WebhookPayload;
pub use slack::{
    CHANNEL_FIELD, CHANNEL_SECRET_PATH, DELIVERY_TIMEOUT, SlackNotifier, WEBHOOK_FIELD,
    WEBHOOK_SECRET_PATH,
};

pub use reqwest::StatusCode;

use akari_secrets::SecretError;
use thiserror::Error;

/// Error types for notification delivery
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Looking up a credential failed
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// The resolved secret held no usable webhook URL
    #[error("Webhook URL not found in secret '{path}'")]
    WebhookUrlMissing {
        /// Logical secret path that was read
        path: String,
    },

    /// The request could not be built or sent (timeout, DNS, TLS, ...)
    #[error("Failed to send webhook request: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Webhook delivery failed with HTTP {status}")]
    Delivery {
        /// Response status
        status: StatusCode,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_missing_message() {
        let err = NotifyError::WebhookUrlMissing {
            path: WEBHOOK_SECRET_PATH.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Webhook URL not found in secret 'slack/webhook_url'"
        );
    }

    #[test]
    fn test_delivery_message_carries_status() {
        let err = NotifyError::Delivery {
            status: StatusCode::FORBIDDEN,
        };
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_secret_error_is_transparent() {
        let err: NotifyError = SecretError::not_configured("VAULT_ADDR / VAULT_TOKEN missing").into();
        assert!(err.to_string().starts_with("Secret store not configured"));
    }
}
