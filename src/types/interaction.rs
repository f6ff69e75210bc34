//! Interaction response envelopes.
//!
//! Mirrors Discord's `InteractionResponse` with a single flat callback data
//! struct. Message callbacks fill `content` / `embeds` / `components`;
//! modal callbacks fill `title` / `custom_id` / `components`.

use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::optional::OptionalField;
use crate::types::{AllowedMentions, Component, Embed, MessageFlags};

/// The type of callback for an interaction response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum InteractionCallbackType {
    /// Acknowledge a ping. Carries no data.
    Pong = 1,
    #[default]
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredUpdateMessage = 6,
    UpdateMessage = 7,
    ApplicationCommandAutocompleteResult = 8,
    /// Show a modal; built from a `ModalBuilder`.
    Modal = 9,
}

/// An interaction response sent back to Discord.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackType,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub data: OptionalField<InteractionCallbackData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionCallbackData {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub content: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub embeds: OptionalField<Vec<Embed>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub allowed_mentions: OptionalField<AllowedMentions>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub components: OptionalField<Vec<Component>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub flags: OptionalField<MessageFlags>,
    /// For modal responses.
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub title: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub custom_id: OptionalField<String>,
}
