//! Builder for webhook executions and webhook message edits.

use crate::builders::limits::{
    append, check_count, check_optional_length, MAX_ACTION_ROWS, MAX_ATTACHMENTS,
    MAX_CONTENT_LENGTH, MAX_EMBEDS, MAX_THREAD_NAME_LENGTH, MAX_WEBHOOK_USERNAME_LENGTH,
};
use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{action_row, AllowedMentions, ChannelMarker, Component, Embed, FileData, Id};

#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until dispatched"]
pub struct WebhookBuilder {
    pub content: OptionalField<String>,
    /// Overrides the webhook's default username.
    pub username: OptionalField<String>,
    pub avatar_url: OptionalField<String>,
    pub embeds: OptionalField<Vec<Embed>>,
    pub allowed_mentions: OptionalField<AllowedMentions>,
    /// Thread inside the webhook's channel to post into.
    pub thread_id: OptionalField<Id<ChannelMarker>>,
    pub components: OptionalField<Vec<Component>>,
    pub attachments: OptionalField<Vec<FileData>>,
    pub ephemeral: OptionalField<bool>,
    /// Creates a forum thread with this name.
    pub thread_name: OptionalField<String>,
}

impl WebhookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: OptionalField::Present(content.into()),
            ..self
        }
    }

    pub fn with_username(self, username: impl Into<String>) -> Self {
        Self {
            username: OptionalField::Present(username.into()),
            ..self
        }
    }

    pub fn with_avatar_url(self, avatar_url: impl Into<String>) -> Self {
        Self {
            avatar_url: OptionalField::Present(avatar_url.into()),
            ..self
        }
    }

    pub fn add_embed(self, embed: Embed) -> Self {
        self.add_embeds([embed])
    }

    pub fn add_embeds(self, embeds: impl IntoIterator<Item = Embed>) -> Self {
        Self {
            embeds: append(self.embeds, embeds),
            ..self
        }
    }

    pub fn with_allowed_mentions(self, allowed_mentions: AllowedMentions) -> Self {
        Self {
            allowed_mentions: OptionalField::Present(allowed_mentions),
            ..self
        }
    }

    pub fn with_thread_id(self, thread_id: Id<ChannelMarker>) -> Self {
        Self {
            thread_id: OptionalField::Present(thread_id),
            ..self
        }
    }

    /// Append a new action row holding just `component`.
    pub fn add_component(self, component: impl Into<Component>) -> Self {
        self.add_components([component])
    }

    /// Append one new action row holding all of `components`.
    pub fn add_components(
        self,
        components: impl IntoIterator<Item = impl Into<Component>>,
    ) -> Self {
        Self {
            components: append(self.components, [action_row(components)]),
            ..self
        }
    }

    pub fn add_attachment(self, attachment: FileData) -> Self {
        self.add_attachments([attachment])
    }

    pub fn add_attachments(self, attachments: impl IntoIterator<Item = FileData>) -> Self {
        Self {
            attachments: append(self.attachments, attachments),
            ..self
        }
    }

    pub fn as_ephemeral(self, ephemeral: bool) -> Self {
        Self {
            ephemeral: OptionalField::Present(ephemeral),
            ..self
        }
    }

    pub fn with_thread_name(self, thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: OptionalField::Present(thread_name.into()),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional_length("content", &self.content, MAX_CONTENT_LENGTH)?;
        check_optional_length("username", &self.username, MAX_WEBHOOK_USERNAME_LENGTH)?;
        check_count("embeds", &self.embeds, MAX_EMBEDS)?;
        check_count("action rows", &self.components, MAX_ACTION_ROWS)?;
        check_count("attachments", &self.attachments, MAX_ATTACHMENTS)?;
        check_optional_length("thread name", &self.thread_name, MAX_THREAD_NAME_LENGTH)?;

        if let OptionalField::Present(thread_id) = self.thread_id {
            if thread_id.predates_epoch() {
                return Err(ValidationError::BeforeEpoch {
                    field: "thread id",
                    value: thread_id.get(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ButtonBuilder;
    use crate::types::{ButtonStyle, DISCORD_EPOCH};
    use static_assertions::assert_impl_all;

    assert_impl_all!(WebhookBuilder: Send, Sync, Clone, Default);

    fn button(id: &str) -> Component {
        ButtonBuilder::new()
            .with_label(id)
            .with_custom_id(id)
            .with_style(ButtonStyle::Primary)
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn username_limit() {
        let builder = WebhookBuilder::new().with_username("u".repeat(32));
        assert_eq!(builder.validate(), Ok(()));

        let builder = WebhookBuilder::new().with_username("u".repeat(40));
        assert_eq!(
            builder.validate(),
            Err(ValidationError::TooLong {
                field: "username",
                limit: 32,
                excess: 8,
            })
        );
    }

    #[test]
    fn thread_name_limit() {
        let builder = WebhookBuilder::new().with_thread_name("t".repeat(101));
        assert_eq!(builder.validate().unwrap_err().excess(), Some(1));
    }

    #[test]
    fn content_limit() {
        let builder = WebhookBuilder::new().with_content("c".repeat(2003));
        assert_eq!(builder.validate().unwrap_err().excess(), Some(3));
    }

    #[test]
    fn too_many_embeds() {
        let builder = WebhookBuilder::new().add_embeds((0..11).map(|_| Embed::new()));
        assert_eq!(
            builder.validate(),
            Err(ValidationError::TooMany {
                field: "embeds",
                limit: 10,
                excess: 1,
            })
        );
    }

    #[test]
    fn too_many_action_rows() {
        let builder = (0..6).fold(WebhookBuilder::new(), |builder, i| {
            builder.add_component(button(&i.to_string()))
        });
        assert_eq!(
            builder.validate(),
            Err(ValidationError::TooMany {
                field: "action rows",
                limit: 5,
                excess: 1,
            })
        );
    }

    #[test]
    fn too_many_attachments() {
        let files = (0..11).map(|i| FileData::new(format!("{i}.log"), vec![0u8]));
        let builder = WebhookBuilder::new().add_attachments(files);
        assert_eq!(
            builder.validate(),
            Err(ValidationError::TooMany {
                field: "attachments",
                limit: 10,
                excess: 1,
            })
        );
    }

    #[test]
    fn username_is_checked_before_embeds() {
        let builder = WebhookBuilder::new()
            .with_username("u".repeat(33))
            .add_embeds((0..11).map(|_| Embed::new()));
        assert!(matches!(
            builder.validate(),
            Err(ValidationError::TooLong {
                field: "username",
                ..
            })
        ));
    }

    #[test]
    fn thread_id_before_epoch_is_rejected() {
        let builder = WebhookBuilder::new().with_thread_id(Id::new(DISCORD_EPOCH - 1));
        assert_eq!(
            builder.validate(),
            Err(ValidationError::BeforeEpoch {
                field: "thread id",
                value: DISCORD_EPOCH - 1,
            })
        );
    }

    #[test]
    fn thread_id_at_or_after_epoch_is_accepted() {
        let builder = WebhookBuilder::new().with_thread_id(Id::new(DISCORD_EPOCH));
        assert_eq!(builder.validate(), Ok(()));

        let builder = WebhookBuilder::new().with_thread_id(Id::new(1_100_000_000_000_000_000));
        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn absent_thread_id_skips_rule() {
        assert_eq!(WebhookBuilder::new().validate(), Ok(()));
    }

    #[test]
    fn ephemeral_false_is_still_present() {
        let builder = WebhookBuilder::new().as_ephemeral(false);
        assert_eq!(builder.ephemeral, OptionalField::Present(false));
    }

    #[test]
    fn attachments_append() {
        let builder = WebhookBuilder::new()
            .add_attachment(FileData::new("a.png", vec![1]))
            .add_attachments([
                FileData::new("b.png", vec![2]),
                FileData::new("c.png", vec![3]),
            ]);
        let names: Vec<_> = builder
            .attachments
            .value_or_default()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }
}
