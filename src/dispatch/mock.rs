//! Recording transport for adapter tests.

use async_lock::Mutex;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::http::{
    ChannelApi, CreateFollowupMessage, CreateGuildScheduledEvent, CreateMessage, EditMessage,
    EditWebhookMessage, ExecuteWebhook, InteractionApi, ModifyGuildScheduledEvent,
    ScheduledEventApi, WebhookApi,
};
use crate::optional::OptionalField;
use crate::types::{
    ApplicationMarker, AttachmentData, ChannelMarker, GuildMarker, GuildScheduledEvent,
    GuildScheduledEventStatus, Id, InteractionMarker, InteractionResponse, Message, MessageFlags,
    MessageMarker, ScheduledEventMarker, WebhookMarker,
};

/// Channel reported for messages sent through tokens rather than channels.
pub(crate) const WEBHOOK_CHANNEL: u64 = 1_100_000_000_000_000_001;
pub(crate) const CREATED_MESSAGE: u64 = 1_100_000_000_000_000_002;
pub(crate) const CREATED_EVENT: u64 = 1_100_000_000_000_000_003;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport rejected {0}")]
pub(crate) struct MockError(pub &'static str);

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateMessage(Id<ChannelMarker>, CreateMessage),
    EditMessage(Id<ChannelMarker>, Id<MessageMarker>, EditMessage),
    CreateInteractionResponse {
        interaction_id: Id<InteractionMarker>,
        token: String,
        response: InteractionResponse,
        attachments: OptionalField<Vec<AttachmentData>>,
    },
    EditOriginalInteractionResponse {
        application_id: Id<ApplicationMarker>,
        token: String,
        message: EditWebhookMessage,
    },
    CreateFollowupMessage {
        application_id: Id<ApplicationMarker>,
        token: String,
        message: CreateFollowupMessage,
    },
    EditFollowupMessage {
        application_id: Id<ApplicationMarker>,
        token: String,
        message_id: Id<MessageMarker>,
        message: EditWebhookMessage,
    },
    ExecuteWebhook {
        webhook_id: Id<WebhookMarker>,
        token: String,
        wait: OptionalField<bool>,
        message: ExecuteWebhook,
    },
    EditWebhookMessage {
        webhook_id: Id<WebhookMarker>,
        token: String,
        message_id: Id<MessageMarker>,
        message: EditWebhookMessage,
    },
    CreateGuildScheduledEvent(Id<GuildMarker>, CreateGuildScheduledEvent),
    ModifyGuildScheduledEvent(
        Id<GuildMarker>,
        Id<ScheduledEventMarker>,
        ModifyGuildScheduledEvent,
    ),
}

impl Call {
    fn name(&self) -> &'static str {
        match self {
            Self::CreateMessage(..) => "create_message",
            Self::EditMessage(..) => "edit_message",
            Self::CreateInteractionResponse { .. } => "create_interaction_response",
            Self::EditOriginalInteractionResponse { .. } => "edit_original_interaction_response",
            Self::CreateFollowupMessage { .. } => "create_followup_message",
            Self::EditFollowupMessage { .. } => "edit_followup_message",
            Self::ExecuteWebhook { .. } => "execute_webhook",
            Self::EditWebhookMessage { .. } => "edit_webhook_message",
            Self::CreateGuildScheduledEvent(..) => "create_guild_scheduled_event",
            Self::ModifyGuildScheduledEvent(..) => "modify_guild_scheduled_event",
        }
    }
}

/// Implements every transport trait by recording the call and answering
/// with a canned resource, or with [`MockError`] when built `failing()`.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    calls: Mutex<Vec<Call>>,
    fail: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: Call) -> Result<(), MockError> {
        let name = call.name();
        self.calls.lock().await.push(call);
        if self.fail {
            Err(MockError(name))
        } else {
            Ok(())
        }
    }
}

fn message(
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    content: &OptionalField<String>,
    flags: OptionalField<MessageFlags>,
) -> Message {
    Message {
        id: message_id,
        channel_id,
        content: content.clone().value_or_default(),
        flags,
    }
}

fn webhook_channel() -> Id<ChannelMarker> {
    Id::new(WEBHOOK_CHANNEL)
}

fn created_message() -> Id<MessageMarker> {
    Id::new(CREATED_MESSAGE)
}

impl ChannelApi for MockTransport {
    type Error = MockError;

    async fn create_message(
        &self,
        channel_id: Id<ChannelMarker>,
        params: CreateMessage,
    ) -> Result<Message, MockError> {
        let response = message(
            channel_id,
            created_message(),
            &params.content,
            OptionalField::Absent,
        );
        self.record(Call::CreateMessage(channel_id, params)).await?;
        Ok(response)
    }

    async fn edit_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        params: EditMessage,
    ) -> Result<Message, MockError> {
        let response = message(
            channel_id,
            message_id,
            &params.content,
            OptionalField::Absent,
        );
        self.record(Call::EditMessage(channel_id, message_id, params))
            .await?;
        Ok(response)
    }
}

impl InteractionApi for MockTransport {
    type Error = MockError;

    async fn create_interaction_response(
        &self,
        interaction_id: Id<InteractionMarker>,
        interaction_token: &str,
        response: InteractionResponse,
        attachments: OptionalField<Vec<AttachmentData>>,
    ) -> Result<(), MockError> {
        self.record(Call::CreateInteractionResponse {
            interaction_id,
            token: interaction_token.to_owned(),
            response,
            attachments,
        })
        .await
    }

    async fn edit_original_interaction_response(
        &self,
        application_id: Id<ApplicationMarker>,
        interaction_token: &str,
        params: EditWebhookMessage,
    ) -> Result<Message, MockError> {
        let response = message(
            webhook_channel(),
            created_message(),
            &params.content,
            OptionalField::Absent,
        );
        self.record(Call::EditOriginalInteractionResponse {
            application_id,
            token: interaction_token.to_owned(),
            message: params,
        })
        .await?;
        Ok(response)
    }

    async fn create_followup_message(
        &self,
        application_id: Id<ApplicationMarker>,
        interaction_token: &str,
        params: CreateFollowupMessage,
    ) -> Result<Message, MockError> {
        let response = message(
            webhook_channel(),
            created_message(),
            &params.content,
            params.flags,
        );
        self.record(Call::CreateFollowupMessage {
            application_id,
            token: interaction_token.to_owned(),
            message: params,
        })
        .await?;
        Ok(response)
    }

    async fn edit_followup_message(
        &self,
        application_id: Id<ApplicationMarker>,
        interaction_token: &str,
        message_id: Id<MessageMarker>,
        params: EditWebhookMessage,
    ) -> Result<Message, MockError> {
        let response = message(
            webhook_channel(),
            message_id,
            &params.content,
            OptionalField::Absent,
        );
        self.record(Call::EditFollowupMessage {
            application_id,
            token: interaction_token.to_owned(),
            message_id,
            message: params,
        })
        .await?;
        Ok(response)
    }
}

impl WebhookApi for MockTransport {
    type Error = MockError;

    async fn execute_webhook(
        &self,
        webhook_id: Id<WebhookMarker>,
        webhook_token: &str,
        wait: OptionalField<bool>,
        params: ExecuteWebhook,
    ) -> Result<Option<Message>, MockError> {
        let channel_id = params.thread_id.value_or_else(webhook_channel);
        let created = message(channel_id, created_message(), &params.content, params.flags);
        let response = (wait == OptionalField::Present(true)).then_some(created);
        self.record(Call::ExecuteWebhook {
            webhook_id,
            token: webhook_token.to_owned(),
            wait,
            message: params,
        })
        .await?;
        Ok(response)
    }

    async fn edit_webhook_message(
        &self,
        webhook_id: Id<WebhookMarker>,
        webhook_token: &str,
        message_id: Id<MessageMarker>,
        params: EditWebhookMessage,
    ) -> Result<Message, MockError> {
        let response = message(
            webhook_channel(),
            message_id,
            &params.content,
            OptionalField::Absent,
        );
        self.record(Call::EditWebhookMessage {
            webhook_id,
            token: webhook_token.to_owned(),
            message_id,
            message: params,
        })
        .await?;
        Ok(response)
    }
}

impl ScheduledEventApi for MockTransport {
    type Error = MockError;

    async fn create_guild_scheduled_event(
        &self,
        guild_id: Id<GuildMarker>,
        params: CreateGuildScheduledEvent,
    ) -> Result<GuildScheduledEvent, MockError> {
        let response = GuildScheduledEvent {
            id: Id::new(CREATED_EVENT),
            guild_id,
            channel_id: params.channel_id.into_option(),
            name: params.name.clone(),
            scheduled_start_time: params.scheduled_start_time,
            scheduled_end_time: params.scheduled_end_time.into_option(),
            entity_type: params.entity_type,
            status: GuildScheduledEventStatus::Scheduled,
        };
        self.record(Call::CreateGuildScheduledEvent(guild_id, params))
            .await?;
        Ok(response)
    }

    async fn modify_guild_scheduled_event(
        &self,
        guild_id: Id<GuildMarker>,
        event_id: Id<ScheduledEventMarker>,
        params: ModifyGuildScheduledEvent,
    ) -> Result<GuildScheduledEvent, MockError> {
        let response = GuildScheduledEvent {
            id: event_id,
            guild_id,
            channel_id: params.channel_id.into_option(),
            name: params.name.clone(),
            scheduled_start_time: params
                .scheduled_start_time
                .value_or_else(DateTime::<Utc>::default),
            scheduled_end_time: params.scheduled_end_time.into_option(),
            entity_type: params.entity_type.value_or_default(),
            status: params
                .status
                .value_or(GuildScheduledEventStatus::Scheduled),
        };
        self.record(Call::ModifyGuildScheduledEvent(guild_id, event_id, params))
            .await?;
        Ok(response)
    }
}
