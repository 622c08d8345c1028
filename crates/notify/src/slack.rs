//! Slack incoming-webhook delivery

use crate::{NotifyError, WebhookPayload};
use akari_secrets::SecretResolver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Logical secret path holding the webhook URL
pub const WEBHOOK_SECRET_PATH: &str = "slack/webhook_url";
/// Field read when the webhook secret is a map
pub const WEBHOOK_FIELD: &str = "webhook_url";
/// Logical secret path holding the default channel
pub const CHANNEL_SECRET_PATH: &str = "slack/channel";
/// Field read when the channel secret is a map
pub const CHANNEL_FIELD: &str = "channel";
/// Upper bound for one delivery request
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages to a Slack incoming webhook.
///
/// The webhook URL is resolved on every call and never cached.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    resolver: SecretResolver,
    client: Client,
}

impl SlackNotifier {
    /// Create a notifier that reads its credentials through `resolver`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the HTTP client cannot be initialized.
    pub fn new(resolver: SecretResolver) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .user_agent(concat!("akari/", env!("CARGO_PKG_VERSION")))
            .timeout(DELIVERY_TIMEOUT)
            .build()?;
        Ok(Self { resolver, client })
    }

    /// Post `text` to the webhook, optionally overriding the channel.
    ///
    /// An empty `channel` is treated as no override. One POST is issued; it is
    /// not retried.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Secret`] if the webhook secret cannot be read
    /// - [`NotifyError::WebhookUrlMissing`] if it holds no URL (nothing is sent)
    /// - [`NotifyError::Http`] on transport failure or timeout
    /// - [`NotifyError::Delivery`] on a non-2xx response
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn post_message(&self, text: &str, channel: Option<&str>) -> Result<(), NotifyError> {
        let webhook_url = self.webhook_url().await?;
        let payload = WebhookPayload::new(text, channel);

        debug!(channel = ?payload.channel, "Posting to Slack webhook");
        let response = self
            .client
            .post(&webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Delivery { status });
        }

        info!(%status, "Slack message delivered");
        Ok(())
    }

    /// Pick the destination channel.
    ///
    /// A non-empty `override_channel` wins. Otherwise the `slack/channel`
    /// secret is read; a map without a `channel` field means "use the
    /// webhook's default".
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Secret`] if the channel secret cannot be read.
    pub async fn resolve_channel(
        &self,
        override_channel: Option<&str>,
    ) -> Result<Option<String>, NotifyError> {
        if let Some(channel) = override_channel.filter(|c| !c.is_empty()) {
            debug!("Using channel override");
            return Ok(Some(channel.to_string()));
        }

        let secret = self.resolver.get_secret(CHANNEL_SECRET_PATH).await?;
        Ok(secret.field(CHANNEL_FIELD).map(str::to_string))
    }

    async fn webhook_url(&self) -> Result<String, NotifyError> {
        let secret = self.resolver.get_secret(WEBHOOK_SECRET_PATH).await?;
        secret
            .field(WEBHOOK_FIELD)
            .map(str::to_string)
            .ok_or_else(|| NotifyError::WebhookUrlMissing {
                path: WEBHOOK_SECRET_PATH.to_string(),
            })
    }
}
