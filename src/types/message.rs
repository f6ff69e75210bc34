//! Message-level types shared by the message, webhook and interaction
//! payloads: mention filtering, flags, attachments, references, and the
//! message resource the transport hands back.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::OptionalField;
use crate::types::id::{
    marker::{AttachmentMarker, ChannelMarker, GuildMarker, MessageMarker, RoleMarker, UserMarker},
    Id,
};

// ---------------------------------------------------------------------------
// Allowed mentions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    Everyone,
    Roles,
    Users,
}

/// Restricts which mentions in the content actually ping.
///
/// The default value allows no pings at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowedMentions {
    pub parse: Vec<MentionType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Id<UserMarker>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Id<RoleMarker>>,
    #[serde(skip_serializing_if = "crate::types::is_false")]
    pub replied_user: bool,
}

impl AllowedMentions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn parse(mut self, kind: MentionType) -> Self {
        self.parse.push(kind);
        self
    }

    pub fn user(mut self, id: Id<UserMarker>) -> Self {
        self.users.push(id);
        self
    }

    pub fn role(mut self, id: Id<RoleMarker>) -> Self {
        self.roles.push(id);
        self
    }

    pub fn replied_user(mut self, ping: bool) -> Self {
        self.replied_user = ping;
        self
    }
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

bitflags! {
    /// Message flags settable on outbound payloads.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MessageFlags: u64 {
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Only the invoking user can see the message.
        const EPHEMERAL = 1 << 6;
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

impl MessageFlags {
    /// `EPHEMERAL` if the field is present and `true`, absent otherwise.
    pub(crate) fn from_ephemeral(ephemeral: OptionalField<bool>) -> OptionalField<Self> {
        match ephemeral {
            OptionalField::Present(true) => OptionalField::Present(Self::EPHEMERAL),
            _ => OptionalField::Absent,
        }
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_truncate(u64::deserialize(deserializer)?))
    }
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// A file to upload alongside a payload.
///
/// The content is forwarded to the transport untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct FileData {
    pub name: String,
    pub content: Vec<u8>,
    pub description: OptionalField<String>,
}

impl FileData {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            description: OptionalField::Absent,
        }
    }

    /// Alt text for the attachment.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = OptionalField::Present(description.into());
        self
    }
}

impl std::fmt::Debug for FileData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileData")
            .field("name", &self.name)
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("description", &self.description)
            .finish()
    }
}

/// Reference to an attachment that already exists on the message, used to
/// keep it when editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialAttachment {
    pub id: Id<AttachmentMarker>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub filename: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub description: OptionalField<String>,
}

impl PartialAttachment {
    pub fn new(id: Id<AttachmentMarker>) -> Self {
        Self {
            id,
            filename: OptionalField::Absent,
            description: OptionalField::Absent,
        }
    }
}

/// Either a new upload or a reference to an existing attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentData {
    File(FileData),
    Existing(PartialAttachment),
}

impl From<FileData> for AttachmentData {
    fn from(file: FileData) -> Self {
        Self::File(file)
    }
}

impl From<PartialAttachment> for AttachmentData {
    fn from(attachment: PartialAttachment) -> Self {
        Self::Existing(attachment)
    }
}

// ---------------------------------------------------------------------------
// References and the message resource
// ---------------------------------------------------------------------------

/// Outbound reply target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReference {
    pub message_id: Id<MessageMarker>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub channel_id: OptionalField<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub guild_id: OptionalField<Id<GuildMarker>>,
    pub fail_if_not_exists: bool,
}

impl MessageReference {
    /// Reply to `message_id`, sending normally if it was deleted.
    pub fn reply(message_id: Id<MessageMarker>) -> Self {
        Self {
            message_id,
            channel_id: OptionalField::Absent,
            guild_id: OptionalField::Absent,
            fail_if_not_exists: false,
        }
    }
}

/// A message as returned by the transport after a create or edit.
///
/// Only the fields callers usually need; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub flags: OptionalField<MessageFlags>,
}
