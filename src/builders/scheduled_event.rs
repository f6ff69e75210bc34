//! Builder for guild scheduled events.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{ChannelMarker, GuildScheduledEventEntityType, GuildScheduledEventStatus, Id};

/// Accumulates a guild scheduled event to create or modify.
///
/// The event name is passed to the dispatch adapter rather than stored here.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until dispatched"]
pub struct ScheduledEventBuilder {
    pub start_time: OptionalField<DateTime<Utc>>,
    pub end_time: OptionalField<DateTime<Utc>>,
    /// Stage or voice channel hosting the event.
    pub channel_id: OptionalField<Id<ChannelMarker>>,
    /// Where an external event happens.
    pub location: OptionalField<String>,
    pub description: OptionalField<String>,
    pub entity_type: GuildScheduledEventEntityType,
    pub status: OptionalField<GuildScheduledEventStatus>,
    /// Cover image bytes.
    pub image: OptionalField<Vec<u8>>,
    /// Audit log reason.
    pub reason: OptionalField<String>,
}

impl ScheduledEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_time(self, start_time: DateTime<Utc>) -> Self {
        Self {
            start_time: OptionalField::Present(start_time),
            ..self
        }
    }

    pub fn with_end_time(self, end_time: DateTime<Utc>) -> Self {
        Self {
            end_time: OptionalField::Present(end_time),
            ..self
        }
    }

    pub fn with_channel_id(self, channel_id: Id<ChannelMarker>) -> Self {
        Self {
            channel_id: OptionalField::Present(channel_id),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: OptionalField::Present(location.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: OptionalField::Present(description.into()),
            ..self
        }
    }

    pub fn with_entity_type(self, entity_type: GuildScheduledEventEntityType) -> Self {
        Self {
            entity_type,
            ..self
        }
    }

    pub fn with_status(self, status: GuildScheduledEventStatus) -> Self {
        Self {
            status: OptionalField::Present(status),
            ..self
        }
    }

    pub fn with_image(self, image: impl Into<Vec<u8>>) -> Self {
        Self {
            image: OptionalField::Present(image.into()),
            ..self
        }
    }

    pub fn with_reason(self, reason: impl Into<String>) -> Self {
        Self {
            reason: OptionalField::Present(reason.into()),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let OptionalField::Present(start_time) = self.start_time else {
            return Err(ValidationError::Missing {
                field: "start time",
            });
        };

        if let OptionalField::Present(end_time) = self.end_time {
            if end_time < start_time {
                return Err(ValidationError::EndBeforeStart);
            }
        }

        if self.entity_type == GuildScheduledEventEntityType::External
            && self.location.is_absent()
        {
            return Err(ValidationError::ExternalWithoutLocation);
        }

        Ok(())
    }
}
