//! Interaction response, modal and follow-up adapters.

use tracing::debug;

use crate::builders::{InteractionBuilder, ModalBuilder};
use crate::dispatch::{gate, DispatchOptions};
use crate::error::{DispatchError, ValidationError};
use crate::http::{CreateFollowupMessage, EditWebhookMessage, InteractionApi};
use crate::optional::OptionalField;
use crate::types::{
    action_row, ApplicationMarker, Id, InteractionCallbackData, InteractionCallbackType,
    InteractionMarker, InteractionResponse, Message, MessageFlags, MessageMarker,
};

const CALLBACK: &str = "POST /interactions/{interaction.id}/{interaction.token}/callback";
const EDIT_ORIGINAL: &str =
    "PATCH /webhooks/{application.id}/{interaction.token}/messages/@original";
const CREATE_FOLLOWUP: &str = "POST /webhooks/{application.id}/{interaction.token}";
const EDIT_FOLLOWUP: &str =
    "PATCH /webhooks/{application.id}/{interaction.token}/messages/{message.id}";

/// Respond to an interaction with the builder's callback kind.
pub async fn create_interaction_response<T: InteractionApi>(
    api: &T,
    interaction_id: Id<InteractionMarker>,
    interaction_token: &str,
    builder: InteractionBuilder,
    options: DispatchOptions,
) -> Result<(), DispatchError<T::Error>> {
    gate(options, CALLBACK, || builder.validate())?;

    let response = InteractionResponse {
        kind: builder.kind,
        data: OptionalField::Present(InteractionCallbackData {
            content: builder.content,
            embeds: builder.embeds,
            allowed_mentions: builder.allowed_mentions,
            components: builder.components,
            flags: MessageFlags::from_ephemeral(builder.ephemeral),
            ..Default::default()
        }),
    };

    debug!(
        route = CALLBACK,
        %interaction_id,
        kind = ?response.kind,
        "dispatching interaction response"
    );
    api.create_interaction_response(
        interaction_id,
        interaction_token,
        response,
        builder.attachments,
    )
    .await
    .map_err(DispatchError::Transport)
}

/// Respond to an interaction by showing a modal.
///
/// Each text input is placed in its own action row. Even without
/// validation, a modal missing its custom ID, title or forms cannot be
/// represented and fails with [`ValidationError::Missing`].
pub async fn create_modal_response<T: InteractionApi>(
    api: &T,
    interaction_id: Id<InteractionMarker>,
    interaction_token: &str,
    builder: ModalBuilder,
    options: DispatchOptions,
) -> Result<(), DispatchError<T::Error>> {
    gate(options, CALLBACK, || builder.validate())?;

    let OptionalField::Present(custom_id) = builder.custom_id else {
        return Err(ValidationError::Missing { field: "custom id" }.into());
    };
    let OptionalField::Present(title) = builder.title else {
        return Err(ValidationError::Missing { field: "title" }.into());
    };
    let OptionalField::Present(forms) = builder.forms else {
        return Err(ValidationError::Missing { field: "forms" }.into());
    };

    let rows = forms.into_iter().map(|form| action_row([form])).collect();
    let response = InteractionResponse {
        kind: InteractionCallbackType::Modal,
        data: OptionalField::Present(InteractionCallbackData {
            title: OptionalField::Present(title),
            custom_id: OptionalField::Present(custom_id),
            components: OptionalField::Present(rows),
            ..Default::default()
        }),
    };

    debug!(route = CALLBACK, %interaction_id, "dispatching modal");
    api.create_interaction_response(
        interaction_id,
        interaction_token,
        response,
        OptionalField::Absent,
    )
    .await
    .map_err(DispatchError::Transport)
}

/// Edit the message sent as the original interaction response.
pub async fn edit_original_interaction_response<T: InteractionApi>(
    api: &T,
    application_id: Id<ApplicationMarker>,
    interaction_token: &str,
    builder: InteractionBuilder,
    options: DispatchOptions,
) -> Result<Message, DispatchError<T::Error>> {
    gate(options, EDIT_ORIGINAL, || builder.validate())?;

    debug!(route = EDIT_ORIGINAL, %application_id, "dispatching original response edit");
    api.edit_original_interaction_response(application_id, interaction_token, edit_params(builder))
        .await
        .map_err(DispatchError::Transport)
}

pub async fn create_followup_message<T: InteractionApi>(
    api: &T,
    application_id: Id<ApplicationMarker>,
    interaction_token: &str,
    builder: InteractionBuilder,
    options: DispatchOptions,
) -> Result<Message, DispatchError<T::Error>> {
    gate(options, CREATE_FOLLOWUP, || builder.validate())?;

    let params = CreateFollowupMessage {
        content: builder.content,
        embeds: builder.embeds,
        allowed_mentions: builder.allowed_mentions,
        components: builder.components,
        attachments: builder.attachments,
        flags: MessageFlags::from_ephemeral(builder.ephemeral),
    };

    debug!(route = CREATE_FOLLOWUP, %application_id, "dispatching follow-up");
    api.create_followup_message(application_id, interaction_token, params)
        .await
        .map_err(DispatchError::Transport)
}

pub async fn edit_followup_message<T: InteractionApi>(
    api: &T,
    application_id: Id<ApplicationMarker>,
    interaction_token: &str,
    message_id: Id<MessageMarker>,
    builder: InteractionBuilder,
    options: DispatchOptions,
) -> Result<Message, DispatchError<T::Error>> {
    gate(options, EDIT_FOLLOWUP, || builder.validate())?;

    debug!(route = EDIT_FOLLOWUP, %application_id, %message_id, "dispatching follow-up edit");
    api.edit_followup_message(
        application_id,
        interaction_token,
        message_id,
        edit_params(builder),
    )
    .await
    .map_err(DispatchError::Transport)
}

// Edits cannot change the ephemeral flag, so it is dropped here.
fn edit_params(builder: InteractionBuilder) -> EditWebhookMessage {
    EditWebhookMessage {
        content: builder.content,
        embeds: builder.embeds,
        allowed_mentions: builder.allowed_mentions,
        components: builder.components,
        attachments: builder.attachments,
    }
}
