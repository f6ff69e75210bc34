//! Builder for interaction responses and follow-up messages.

use crate::builders::limits::{
    append, check_count, check_optional_length, MAX_ACTION_ROWS, MAX_CONTENT_LENGTH, MAX_EMBEDS,
};
use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{
    action_row, AllowedMentions, AttachmentData, Component, Embed, FileData,
    InteractionCallbackType,
};

/// Accumulates a message-style interaction response.
///
/// Modals have their own [`ModalBuilder`](crate::builders::ModalBuilder);
/// `kind` must not be [`InteractionCallbackType::Modal`] or
/// [`InteractionCallbackType::Pong`].
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until dispatched"]
pub struct InteractionBuilder {
    pub content: OptionalField<String>,
    pub embeds: OptionalField<Vec<Embed>>,
    pub allowed_mentions: OptionalField<AllowedMentions>,
    pub ephemeral: OptionalField<bool>,
    pub components: OptionalField<Vec<Component>>,
    pub attachments: OptionalField<Vec<AttachmentData>>,
    pub kind: InteractionCallbackType,
}

impl InteractionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: OptionalField::Present(content.into()),
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

    pub fn as_ephemeral(self, ephemeral: bool) -> Self {
        Self {
            ephemeral: OptionalField::Present(ephemeral),
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

    /// Upload a file or keep an existing attachment.
    pub fn add_attachment(self, attachment: impl Into<AttachmentData>) -> Self {
        Self {
            attachments: append(self.attachments, [attachment.into()]),
            ..self
        }
    }

    /// Upload `content` as a file called `name`.
    pub fn add_file(self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.add_attachment(FileData::new(name, content))
    }

    pub fn add_attachments(self, attachments: impl IntoIterator<Item = FileData>) -> Self {
        Self {
            attachments: append(
                self.attachments,
                attachments.into_iter().map(AttachmentData::File),
            ),
            ..self
        }
    }

    pub fn with_kind(self, kind: InteractionCallbackType) -> Self {
        Self { kind, ..self }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(
            self.kind,
            InteractionCallbackType::Pong | InteractionCallbackType::Modal
        ) {
            return Err(ValidationError::UnsupportedResponseKind(self.kind));
        }

        if self.kind == InteractionCallbackType::ChannelMessageWithSource
            && self.content.is_absent()
            && self.embeds.is_absent()
            && self.components.is_absent()
        {
            return Err(ValidationError::NoMessageBody);
        }

        check_optional_length("content", &self.content, MAX_CONTENT_LENGTH)?;
        check_count("embeds", &self.embeds, MAX_EMBEDS)?;
        check_count("action rows", &self.components, MAX_ACTION_ROWS)?;
        Ok(())
    }
}
