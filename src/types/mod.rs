//! Discord API types touched by the builders.
//!
//! Only the outbound shape of each object is modelled, plus the minimal
//! resources the transport returns. Every optional key is an
//! [`OptionalField`](crate::OptionalField) so absent values never reach the
//! wire.

/// Type-safe IDs with marker types.
pub mod id;

/// Action rows, buttons, selects and text inputs.
pub mod component;

/// Rich embeds.
pub mod embed;

/// Interaction response envelopes.
pub mod interaction;

/// Allowed mentions, flags, attachments and the message resource.
pub mod message;

/// Guild scheduled event enums and resource.
pub mod scheduled_event;

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !value
}

// ---- IDs ------------------------------------------------------------------
pub use self::id::marker::{
    ApplicationMarker, AttachmentMarker, ChannelMarker, EmojiMarker, GuildMarker, InteractionMarker,
    MessageMarker, RoleMarker, ScheduledEventMarker, UserMarker, WebhookMarker,
};
pub use self::id::{Id, DISCORD_EPOCH};

// ---- Components -----------------------------------------------------------
pub use self::component::{
    action_row, ActionRow, Button, ButtonStyle, Component, ComponentType, PartialEmoji, SelectMenu,
    SelectOption, TextInput, TextInputStyle,
};

// ---- Embeds ---------------------------------------------------------------
pub use self::embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};

// ---- Messages -------------------------------------------------------------
pub use self::message::{
    AllowedMentions, AttachmentData, FileData, MentionType, Message, MessageFlags, MessageReference,
    PartialAttachment,
};

// ---- Interactions ---------------------------------------------------------
pub use self::interaction::{InteractionCallbackData, InteractionCallbackType, InteractionResponse};

// ---- Scheduled events -----------------------------------------------------
pub use self::scheduled_event::{
    GuildScheduledEvent, GuildScheduledEventEntityMetadata, GuildScheduledEventEntityType,
    GuildScheduledEventPrivacyLevel, GuildScheduledEventStatus,
};
