//! Markers for the resource types a builder payload can reference.
//!
//! Markers perform no logical action. They only keep IDs of different
//! resources apart: a [`Id<ChannelMarker>`] cannot be passed where a
//! [`Id<MessageMarker>`] is expected, even though both are snowflakes.
//!
//! [`Id<ChannelMarker>`]: super::Id
//! [`Id<MessageMarker>`]: super::Id

/// Marker for application IDs, used when editing interaction responses
/// and follow-ups.
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for attachment IDs.
///
/// Used by [`PartialAttachment`] to keep an already uploaded file.
///
/// [`PartialAttachment`]: crate::types::PartialAttachment
#[derive(Debug)]
#[non_exhaustive]
pub struct AttachmentMarker;

/// Marker for channel IDs, including thread IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for custom emoji IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// Marker for guild IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for interaction IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct InteractionMarker;

/// Marker for message IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for role IDs.
///
/// Used by [`AllowedMentions`] to whitelist role pings.
///
/// [`AllowedMentions`]: crate::types::AllowedMentions
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for guild scheduled event IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct ScheduledEventMarker;

/// Marker for user IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;

/// Marker for webhook IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct WebhookMarker;
