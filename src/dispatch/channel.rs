//! Channel message adapters.

use tracing::debug;

use crate::builders::MessageBuilder;
use crate::dispatch::{gate, DispatchOptions};
use crate::error::{DispatchError, ValidationError};
use crate::http::{ChannelApi, CreateMessage, EditMessage};
use crate::types::{AttachmentData, ChannelMarker, Id, Message, MessageMarker, MessageReference};

const CREATE_MESSAGE: &str = "POST /channels/{channel.id}/messages";
const EDIT_MESSAGE: &str = "PATCH /channels/{channel.id}/messages/{message.id}";

/// Post `builder` to a channel, replying to `reply_to` if set.
pub async fn create_message<T: ChannelApi>(
    api: &T,
    channel_id: Id<ChannelMarker>,
    builder: MessageBuilder,
    options: DispatchOptions,
) -> Result<Message, DispatchError<T::Error>> {
    gate(options, CREATE_MESSAGE, || builder.validate())?;

    let params = CreateMessage {
        content: builder.content,
        embeds: builder.embeds,
        allowed_mentions: builder.allowed_mentions,
        message_reference: builder.reply_to.map(MessageReference::reply),
        components: builder.components,
        attachments: builder
            .attachments
            .map(|files| files.into_iter().map(AttachmentData::File).collect()),
    };

    debug!(route = CREATE_MESSAGE, %channel_id, "dispatching message");
    api.create_message(channel_id, params)
        .await
        .map_err(DispatchError::Transport)
}

/// Replace the editable parts of an existing message.
///
/// Attachments and the reply target are not part of an edit. With
/// validation on, a builder carrying a reply target is rejected.
pub async fn edit_message<T: ChannelApi>(
    api: &T,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    builder: MessageBuilder,
    options: DispatchOptions,
) -> Result<Message, DispatchError<T::Error>> {
    gate(options, EDIT_MESSAGE, || {
        builder.validate()?;
        if builder.reply_to.is_present() {
            return Err(ValidationError::ReplyOnEdit);
        }
        Ok(())
    })?;

    let params = EditMessage {
        content: builder.content,
        embeds: builder.embeds,
        allowed_mentions: builder.allowed_mentions,
        components: builder.components,
    };

    debug!(route = EDIT_MESSAGE, %channel_id, %message_id, "dispatching message edit");
    api.edit_message(channel_id, message_id, params)
        .await
        .map_err(DispatchError::Transport)
}
