//! Guild scheduled event adapters.

use chrono::Utc;
use tracing::debug;

use crate::builders::ScheduledEventBuilder;
use crate::dispatch::{gate, DispatchOptions};
use crate::error::DispatchError;
use crate::http::{CreateGuildScheduledEvent, ModifyGuildScheduledEvent, ScheduledEventApi};
use crate::optional::OptionalField;
use crate::types::{
    GuildMarker, GuildScheduledEvent, GuildScheduledEventEntityMetadata,
    GuildScheduledEventPrivacyLevel, Id, ScheduledEventMarker,
};

const CREATE: &str = "POST /guilds/{guild.id}/scheduled-events";
const MODIFY: &str = "PATCH /guilds/{guild.id}/scheduled-events/{guild_scheduled_event.id}";

/// Create a guild-only scheduled event called `name`.
///
/// Without validation, an unset start time falls back to now.
pub async fn create_guild_scheduled_event<T: ScheduledEventApi>(
    api: &T,
    guild_id: Id<GuildMarker>,
    name: impl Into<String>,
    builder: ScheduledEventBuilder,
    options: DispatchOptions,
) -> Result<GuildScheduledEvent, DispatchError<T::Error>> {
    gate(options, CREATE, || builder.validate())?;

    let params = CreateGuildScheduledEvent {
        channel_id: builder.channel_id,
        entity_metadata: metadata(builder.location),
        name: name.into(),
        privacy_level: GuildScheduledEventPrivacyLevel::GuildOnly,
        scheduled_start_time: builder.start_time.value_or_else(Utc::now),
        scheduled_end_time: builder.end_time,
        description: builder.description,
        entity_type: builder.entity_type,
        image: builder.image,
        reason: builder.reason,
    };

    debug!(route = CREATE, %guild_id, name = %params.name, "dispatching scheduled event");
    api.create_guild_scheduled_event(guild_id, params)
        .await
        .map_err(DispatchError::Transport)
}

/// Modify an existing event. Unset builder fields are left unchanged.
pub async fn modify_guild_scheduled_event<T: ScheduledEventApi>(
    api: &T,
    guild_id: Id<GuildMarker>,
    event_id: Id<ScheduledEventMarker>,
    name: impl Into<String>,
    builder: ScheduledEventBuilder,
    options: DispatchOptions,
) -> Result<GuildScheduledEvent, DispatchError<T::Error>> {
    gate(options, MODIFY, || builder.validate())?;

    let params = ModifyGuildScheduledEvent {
        channel_id: builder.channel_id,
        entity_metadata: metadata(builder.location),
        name: name.into(),
        privacy_level: OptionalField::Present(GuildScheduledEventPrivacyLevel::GuildOnly),
        scheduled_start_time: builder.start_time,
        scheduled_end_time: builder.end_time,
        description: builder.description,
        entity_type: OptionalField::Present(builder.entity_type),
        status: builder.status,
        image: builder.image,
        reason: builder.reason,
    };

    debug!(route = MODIFY, %guild_id, %event_id, "dispatching scheduled event update");
    api.modify_guild_scheduled_event(guild_id, event_id, params)
        .await
        .map_err(DispatchError::Transport)
}

fn metadata(location: OptionalField<String>) -> OptionalField<GuildScheduledEventEntityMetadata> {
    location.map(|location| GuildScheduledEventEntityMetadata {
        location: OptionalField::Present(location),
    })
}
