//! `notify-slack` command

use crate::cli::CliError;
use akari_notify::SlackNotifier;
use tracing::info;

/// Join `words`, pick the channel and post the message.
///
/// Returns the message as sent, for the confirmation line.
///
/// # Errors
///
/// Returns the channel lookup or delivery failure mapped to a [`CliError`].
pub async fn execute_notify(
    notifier: &SlackNotifier,
    words: &[String],
    channel_override: Option<&str>,
) -> Result<String, CliError> {
    let message = words.join(" ");
    let channel = notifier.resolve_channel(channel_override).await?;

    notifier.post_message(&message, channel.as_deref()).await?;
    info!(channel = ?channel, "Notification sent");

    Ok(message)
}
