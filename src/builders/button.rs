//! Builder for buttons.

use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{Button, ButtonStyle, PartialEmoji};

#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until built"]
pub struct ButtonBuilder {
    pub label: OptionalField<String>,
    pub custom_id: OptionalField<String>,
    pub style: OptionalField<ButtonStyle>,
    pub emoji: OptionalField<PartialEmoji>,
    /// Target of a [`ButtonStyle::Link`] button.
    pub url: OptionalField<String>,
    pub disabled: OptionalField<bool>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: OptionalField::Present(label.into()),
            ..self
        }
    }

    pub fn with_custom_id(self, custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: OptionalField::Present(custom_id.into()),
            ..self
        }
    }

    pub fn with_style(self, style: ButtonStyle) -> Self {
        Self {
            style: OptionalField::Present(style),
            ..self
        }
    }

    pub fn with_emoji(self, emoji: PartialEmoji) -> Self {
        Self {
            emoji: OptionalField::Present(emoji),
            ..self
        }
    }

    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: OptionalField::Present(url.into()),
            ..self
        }
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        Self {
            disabled: OptionalField::Present(disabled),
            ..self
        }
    }

    /// Fails if a field the wire format requires was never set: label and
    /// style always, the URL for link buttons, the custom ID otherwise.
    pub fn build(self) -> Result<Button, ValidationError> {
        if self.label.is_absent() {
            return Err(ValidationError::Missing { field: "label" });
        }
        let OptionalField::Present(style) = self.style else {
            return Err(ValidationError::Missing { field: "style" });
        };
        match style {
            ButtonStyle::Link if self.url.is_absent() => {
                return Err(ValidationError::Missing { field: "url" });
            }
            ButtonStyle::Link => {}
            _ if self.custom_id.is_absent() => {
                return Err(ValidationError::Missing { field: "custom id" });
            }
            _ => {}
        }

        Ok(Button {
            style,
            label: self.label,
            emoji: self.emoji,
            custom_id: self.custom_id,
            url: self.url,
            disabled: self.disabled,
        })
    }
}
