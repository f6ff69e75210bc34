//! Guild scheduled event enums and the event resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::optional::OptionalField;
use crate::types::id::{
    marker::{ChannelMarker, GuildMarker, ScheduledEventMarker},
    Id,
};

/// Where an event takes place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GuildScheduledEventEntityType {
    #[default]
    StageInstance = 1,
    Voice = 2,
    /// Outside of Discord; requires a location.
    External = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GuildScheduledEventStatus {
    Scheduled = 1,
    Active = 2,
    Completed = 3,
    Canceled = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GuildScheduledEventPrivacyLevel {
    GuildOnly = 2,
}

/// Extra data for [`GuildScheduledEventEntityType::External`] events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildScheduledEventEntityMetadata {
    #[serde(default, skip_serializing_if = "OptionalField::is_absent")]
    pub location: OptionalField<String>,
}

/// A scheduled event as returned by the transport.
///
/// Discord sends `null` for unset fields here, hence `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuildScheduledEvent {
    pub id: Id<ScheduledEventMarker>,
    pub guild_id: Id<GuildMarker>,
    pub channel_id: Option<Id<ChannelMarker>>,
    pub name: String,
    pub scheduled_start_time: DateTime<Utc>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub entity_type: GuildScheduledEventEntityType,
    pub status: GuildScheduledEventStatus,
}
