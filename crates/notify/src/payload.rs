use serde::Serialize;

/// JSON body accepted by a Slack incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload<'a> {
    /// Message body, may be empty
    pub text: &'a str,
    /// Destination override; omitted to use the webhook's default channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<&'a str>,
}

impl<'a> WebhookPayload<'a> {
    /// Build a payload, dropping an empty channel.
    #[must_use]
    pub fn new(text: &'a str, channel: Option<&'a str>) -> Self {
        Self {
            text,
            channel: channel.filter(|c| !c.is_empty()),
        }
    }
}
