//! Rich embeds attached to messages.
//!
//! Only the outbound shape is modelled. Construction follows the same
//! consuming-builder style as the payload builders.

use serde::Serialize;

use crate::optional::OptionalField;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub title: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub description: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub url: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub color: OptionalField<u32>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub footer: OptionalField<EmbedFooter>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub image: OptionalField<EmbedMedia>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub thumbnail: OptionalField<EmbedMedia>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub author: OptionalField<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// ISO 8601 timestamp.
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub timestamp: OptionalField<String>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = OptionalField::Present(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = OptionalField::Present(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = OptionalField::Present(url.into());
        self
    }

    /// 24-bit RGB, e.g. `0xFF6600`.
    pub fn color(mut self, color: u32) -> Self {
        self.color = OptionalField::Present(color);
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = OptionalField::Present(EmbedFooter {
            text: text.into(),
            icon_url: OptionalField::Absent,
        });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = OptionalField::Present(EmbedMedia { url: url.into() });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = OptionalField::Present(EmbedMedia { url: url.into() });
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = OptionalField::Present(EmbedAuthor {
            name: name.into(),
            url: OptionalField::Absent,
            icon_url: OptionalField::Absent,
        });
        self
    }

    pub fn timestamp(mut self, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        self.timestamp = OptionalField::Present(timestamp.to_rfc3339());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub icon_url: OptionalField<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub url: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub icon_url: OptionalField<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}
