//! Builder for channel messages.

use crate::builders::limits::{
    append, check_count, check_optional_length, MAX_ACTION_ROWS, MAX_ATTACHMENTS,
    MAX_CONTENT_LENGTH, MAX_EMBEDS,
};
use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{action_row, AllowedMentions, Component, Embed, FileData, Id, MessageMarker};

/// Accumulates a message to create or edit in a channel.
///
/// ```ignore
/// let message = MessageBuilder::new()
///     .with_content("Deploy finished")
///     .add_embed(Embed::new().title("v1.4.2").color(0x57F287))
///     .add_component(link_button);
/// message.validate()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until dispatched"]
pub struct MessageBuilder {
    pub content: OptionalField<String>,
    /// Message this one replies to. Only meaningful when creating.
    pub reply_to: OptionalField<Id<MessageMarker>>,
    pub embeds: OptionalField<Vec<Embed>>,
    pub allowed_mentions: OptionalField<AllowedMentions>,
    pub attachments: OptionalField<Vec<FileData>>,
    /// Action rows.
    pub components: OptionalField<Vec<Component>>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: OptionalField::Present(content.into()),
            ..self
        }
    }

    pub fn with_reply_to(self, message_id: Id<MessageMarker>) -> Self {
        Self {
            reply_to: OptionalField::Present(message_id),
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

    pub fn add_attachment(self, attachment: FileData) -> Self {
        self.add_attachments([attachment])
    }

    pub fn add_attachments(self, attachments: impl IntoIterator<Item = FileData>) -> Self {
        Self {
            attachments: append(self.attachments, attachments),
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

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional_length("content", &self.content, MAX_CONTENT_LENGTH)?;
        check_count("embeds", &self.embeds, MAX_EMBEDS)?;
        check_count("attachments", &self.attachments, MAX_ATTACHMENTS)?;
        check_count("action rows", &self.components, MAX_ACTION_ROWS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ButtonBuilder;
    use crate::types::{ButtonStyle, Component};
    use static_assertions::assert_impl_all;

    assert_impl_all!(MessageBuilder: Send, Sync, Clone, Default);

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
    fn content_at_limit_is_valid() {
        let builder = MessageBuilder::new().with_content("a".repeat(2000));
        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn content_over_limit_reports_excess() {
        let builder = MessageBuilder::new().with_content("a".repeat(2001));
        let error = builder.validate().unwrap_err();
        assert_eq!(error.excess(), Some(1));
        assert!(error.to_string().contains("got 1 too many"));
    }

    #[test]
    fn empty_builder_is_valid() {
        assert_eq!(MessageBuilder::new().validate(), Ok(()));
    }

    #[test]
    fn too_many_embeds() {
        let embeds = (0..12).map(|i| Embed::new().title(i.to_string()));
        let builder = MessageBuilder::new().add_embeds(embeds);
        assert_eq!(
            builder.validate(),
            Err(ValidationError::TooMany {
                field: "embeds",
                limit: 10,
                excess: 2,
            })
        );
    }

    #[test]
    fn too_many_attachments() {
        let builder = MessageBuilder::new()
            .add_attachments((0..11).map(|i| FileData::new(format!("{i}.txt"), vec![0u8])));
        assert_eq!(builder.validate().unwrap_err().excess(), Some(1));
    }

    #[test]
    fn too_many_action_rows() {
        let builder = (0..6).fold(MessageBuilder::new(), |builder, i| {
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
    fn first_failing_rule_wins() {
        let builder = MessageBuilder::new()
            .with_content("a".repeat(2005))
            .add_embeds((0..11).map(|_| Embed::new()));
        assert!(matches!(
            builder.validate(),
            Err(ValidationError::TooLong {
                field: "content",
                ..
            })
        ));
    }

    #[test]
    fn template_is_unchanged_by_derived_builders() {
        let template = MessageBuilder::new()
            .with_content("base")
            .add_embed(Embed::new().title("one"));
        let snapshot = template.clone();

        let derived = template
            .clone()
            .with_content("changed")
            .add_embed(Embed::new().title("two"));

        assert_eq!(template, snapshot);
        assert_eq!(derived.embeds.map(|e| e.len()), OptionalField::Present(2));
    }

    #[test]
    fn embeds_append_in_order() {
        let builder = MessageBuilder::new()
            .add_embed(Embed::new().title("x"))
            .add_embeds([Embed::new().title("y"), Embed::new().title("x")]);
        let titles: Vec<_> = builder
            .embeds
            .value_or_default()
            .into_iter()
            .map(|e| e.title.value_or_default())
            .collect();
        assert_eq!(titles, ["x", "y", "x"]);
    }

    #[test]
    fn each_add_component_call_creates_its_own_row() {
        let builder = MessageBuilder::new()
            .add_component(button("a"))
            .add_component(button("b"));
        let rows = builder.components.value_or_default();
        assert_eq!(rows.len(), 2);
        for row in rows {
            match row {
                Component::ActionRow(row) => assert_eq!(row.components.len(), 1),
                other => panic!("expected action row, got {other:?}"),
            }
        }
    }

    #[test]
    fn add_components_keeps_previous_rows() {
        let builder = MessageBuilder::new()
            .add_component(button("a"))
            .add_components([button("b"), button("c")]);
        let rows = builder.components.value_or_default();
        assert_eq!(rows.len(), 2);
        match &rows[1] {
            Component::ActionRow(row) => assert_eq!(row.components.len(), 2),
            other => panic!("expected action row, got {other:?}"),
        }
    }

    #[test]
    fn validate_is_pure() {
        let builder = MessageBuilder::new().with_content("a".repeat(2001));
        let snapshot = builder.clone();
        assert_eq!(builder.validate(), builder.validate());
        assert_eq!(builder, snapshot);
    }
}
