//! Transport contracts for the Discord REST API.
//!
//! The dispatch adapters never speak HTTP themselves. They project a builder
//! into one of the flat request structs below and hand it to an implementor
//! of the matching trait, which owns auth headers, rate limits, retries and
//! encoding. Request structs serialize to the JSON body Discord expects;
//! uploads, query parameters and the audit-log reason are `#[serde(skip)]`
//! and left for the transport to place in multipart parts, the query string
//! or headers.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::optional::OptionalField;
use crate::types::{
    AllowedMentions, ApplicationMarker, AttachmentData, ChannelMarker, Component, Embed,
    GuildMarker, GuildScheduledEvent, GuildScheduledEventEntityMetadata,
    GuildScheduledEventEntityType, GuildScheduledEventPrivacyLevel, GuildScheduledEventStatus, Id,
    InteractionMarker, InteractionResponse, Message, MessageFlags, MessageMarker, MessageReference,
    ScheduledEventMarker, WebhookMarker,
};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /channels/{channel.id}/messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub content: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub embeds: OptionalField<Vec<Embed>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub allowed_mentions: OptionalField<AllowedMentions>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub message_reference: OptionalField<MessageReference>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub components: OptionalField<Vec<Component>>,
    #[serde(skip)]
    pub attachments: OptionalField<Vec<AttachmentData>>,
}

/// Body of `PATCH /channels/{channel.id}/messages/{message.id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditMessage {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub content: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub embeds: OptionalField<Vec<Embed>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub allowed_mentions: OptionalField<AllowedMentions>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub components: OptionalField<Vec<Component>>,
}

/// Body of `POST /webhooks/{webhook.id}/{webhook.token}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecuteWebhook {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub content: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub username: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub avatar_url: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub embeds: OptionalField<Vec<Embed>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub allowed_mentions: OptionalField<AllowedMentions>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub components: OptionalField<Vec<Component>>,
    #[serde(skip)]
    pub attachments: OptionalField<Vec<AttachmentData>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub flags: OptionalField<MessageFlags>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub thread_name: OptionalField<String>,
    /// `thread_id` query parameter.
    #[serde(skip)]
    pub thread_id: OptionalField<Id<ChannelMarker>>,
}

/// Body of `POST /webhooks/{application.id}/{interaction.token}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateFollowupMessage {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub content: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub embeds: OptionalField<Vec<Embed>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub allowed_mentions: OptionalField<AllowedMentions>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub components: OptionalField<Vec<Component>>,
    #[serde(skip)]
    pub attachments: OptionalField<Vec<AttachmentData>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub flags: OptionalField<MessageFlags>,
}

/// Body of `PATCH /webhooks/{id}/{token}/messages/{message.id}`.
///
/// Shared by webhook message edits and by interaction response and
/// follow-up edits, which Discord routes through the same endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditWebhookMessage {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub content: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub embeds: OptionalField<Vec<Embed>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub allowed_mentions: OptionalField<AllowedMentions>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub components: OptionalField<Vec<Component>>,
    #[serde(skip)]
    pub attachments: OptionalField<Vec<AttachmentData>>,
}

/// Body of `POST /guilds/{guild.id}/scheduled-events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateGuildScheduledEvent {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub channel_id: OptionalField<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub entity_metadata: OptionalField<GuildScheduledEventEntityMetadata>,
    pub name: String,
    pub privacy_level: GuildScheduledEventPrivacyLevel,
    pub scheduled_start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub scheduled_end_time: OptionalField<DateTime<Utc>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub description: OptionalField<String>,
    pub entity_type: GuildScheduledEventEntityType,
    /// Raw image bytes; the transport encodes them as a data URI.
    #[serde(skip)]
    pub image: OptionalField<Vec<u8>>,
    /// `X-Audit-Log-Reason` header.
    #[serde(skip)]
    pub reason: OptionalField<String>,
}

/// Body of `PATCH /guilds/{guild.id}/scheduled-events/{event.id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifyGuildScheduledEvent {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub channel_id: OptionalField<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub entity_metadata: OptionalField<GuildScheduledEventEntityMetadata>,
    pub name: String,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub privacy_level: OptionalField<GuildScheduledEventPrivacyLevel>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub scheduled_start_time: OptionalField<DateTime<Utc>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub scheduled_end_time: OptionalField<DateTime<Utc>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub description: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub entity_type: OptionalField<GuildScheduledEventEntityType>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub status: OptionalField<GuildScheduledEventStatus>,
    #[serde(skip)]
    pub image: OptionalField<Vec<u8>>,
    #[serde(skip)]
    pub reason: OptionalField<String>,
}

// ---------------------------------------------------------------------------
// Transport traits
// ---------------------------------------------------------------------------

/// Channel message endpoints.
pub trait ChannelApi: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message: CreateMessage,
    ) -> impl Future<Output = Result<Message, Self::Error>> + Send;

    fn edit_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        message: EditMessage,
    ) -> impl Future<Output = Result<Message, Self::Error>> + Send;
}

/// Interaction callback and follow-up endpoints.
pub trait InteractionApi: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Discord answers `204 No Content`.
    fn create_interaction_response(
        &self,
        interaction_id: Id<InteractionMarker>,
        interaction_token: &str,
        response: InteractionResponse,
        attachments: OptionalField<Vec<AttachmentData>>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn edit_original_interaction_response(
        &self,
        application_id: Id<ApplicationMarker>,
        interaction_token: &str,
        message: EditWebhookMessage,
    ) -> impl Future<Output = Result<Message, Self::Error>> + Send;

    fn create_followup_message(
        &self,
        application_id: Id<ApplicationMarker>,
        interaction_token: &str,
        message: CreateFollowupMessage,
    ) -> impl Future<Output = Result<Message, Self::Error>> + Send;

    fn edit_followup_message(
        &self,
        application_id: Id<ApplicationMarker>,
        interaction_token: &str,
        message_id: Id<MessageMarker>,
        message: EditWebhookMessage,
    ) -> impl Future<Output = Result<Message, Self::Error>> + Send;
}

/// Webhook endpoints.
pub trait WebhookApi: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the created message only when `wait` is `true`.
    fn execute_webhook(
        &self,
        webhook_id: Id<WebhookMarker>,
        webhook_token: &str,
        wait: OptionalField<bool>,
        message: ExecuteWebhook,
    ) -> impl Future<Output = Result<Option<Message>, Self::Error>> + Send;

    fn edit_webhook_message(
        &self,
        webhook_id: Id<WebhookMarker>,
        webhook_token: &str,
        message_id: Id<MessageMarker>,
        message: EditWebhookMessage,
    ) -> impl Future<Output = Result<Message, Self::Error>> + Send;
}

/// Guild scheduled event endpoints.
pub trait ScheduledEventApi: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_guild_scheduled_event(
        &self,
        guild_id: Id<GuildMarker>,
        event: CreateGuildScheduledEvent,
    ) -> impl Future<Output = Result<GuildScheduledEvent, Self::Error>> + Send;

    fn modify_guild_scheduled_event(
        &self,
        guild_id: Id<GuildMarker>,
        event_id: Id<ScheduledEventMarker>,
        event: ModifyGuildScheduledEvent,
    ) -> impl Future<Output = Result<GuildScheduledEvent, Self::Error>> + Send;
}
