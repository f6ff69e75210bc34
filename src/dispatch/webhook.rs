//! Webhook adapters.

use tracing::debug;

use crate::builders::WebhookBuilder;
use crate::dispatch::{gate, DispatchOptions};
use crate::error::DispatchError;
use crate::http::{EditWebhookMessage, ExecuteWebhook, WebhookApi};
use crate::optional::OptionalField;
use crate::types::{
    AttachmentData, FileData, Id, Message, MessageFlags, MessageMarker, WebhookMarker,
};

const EXECUTE: &str = "POST /webhooks/{webhook.id}/{webhook.token}";
const EDIT_MESSAGE: &str = "PATCH /webhooks/{webhook.id}/{webhook.token}/messages/{message.id}";

/// Execute a webhook.
///
/// Discord only returns the created message when `wait` is `true`; otherwise
/// the result is `None`.
pub async fn execute_webhook<T: WebhookApi>(
    api: &T,
    webhook_id: Id<WebhookMarker>,
    webhook_token: &str,
    builder: WebhookBuilder,
    wait: OptionalField<bool>,
    options: DispatchOptions,
) -> Result<Option<Message>, DispatchError<T::Error>> {
    gate(options, EXECUTE, || builder.validate())?;

    let params = ExecuteWebhook {
        content: builder.content,
        username: builder.username,
        avatar_url: builder.avatar_url,
        embeds: builder.embeds,
        allowed_mentions: builder.allowed_mentions,
        components: builder.components,
        attachments: files(builder.attachments),
        flags: MessageFlags::from_ephemeral(builder.ephemeral),
        thread_name: builder.thread_name,
        thread_id: builder.thread_id,
    };

    debug!(route = EXECUTE, %webhook_id, ?wait, "dispatching webhook");
    api.execute_webhook(webhook_id, webhook_token, wait, params)
        .await
        .map_err(DispatchError::Transport)
}

/// Edit a message previously sent by the webhook.
pub async fn edit_webhook_message<T: WebhookApi>(
    api: &T,
    webhook_id: Id<WebhookMarker>,
    webhook_token: &str,
    message_id: Id<MessageMarker>,
    builder: WebhookBuilder,
    options: DispatchOptions,
) -> Result<Message, DispatchError<T::Error>> {
    gate(options, EDIT_MESSAGE, || builder.validate())?;

    let params = EditWebhookMessage {
        content: builder.content,
        embeds: builder.embeds,
        allowed_mentions: builder.allowed_mentions,
        components: builder.components,
        attachments: files(builder.attachments),
    };

    debug!(route = EDIT_MESSAGE, %webhook_id, %message_id, "dispatching webhook message edit");
    api.edit_webhook_message(webhook_id, webhook_token, message_id, params)
        .await
        .map_err(DispatchError::Transport)
}

fn files(attachments: OptionalField<Vec<FileData>>) -> OptionalField<Vec<AttachmentData>> {
    attachments.map(|files| files.into_iter().map(AttachmentData::File).collect())
}
