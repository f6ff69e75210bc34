//! Builders for modals and the text inputs they contain.

use crate::builders::limits::{
    append, check_length, MAX_CUSTOM_ID_LENGTH, MAX_MODAL_FORMS, MAX_MODAL_TITLE_LENGTH,
};
use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{TextInput, TextInputStyle};

// ===========================================================================
// TextInputBuilder
// ===========================================================================

#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until built"]
pub struct TextInputBuilder {
    pub custom_id: OptionalField<String>,
    pub placeholder: OptionalField<String>,
    pub label: OptionalField<String>,
    pub style: TextInputStyle,
    /// Pre-filled text.
    pub value: OptionalField<String>,
    pub min_length: OptionalField<u16>,
    pub max_length: OptionalField<u16>,
    pub required: OptionalField<bool>,
}

impl TextInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_id(self, custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: OptionalField::Present(custom_id.into()),
            ..self
        }
    }

    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: OptionalField::Present(placeholder.into()),
            ..self
        }
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: OptionalField::Present(label.into()),
            ..self
        }
    }

    pub fn with_style(self, style: TextInputStyle) -> Self {
        Self { style, ..self }
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        Self {
            value: OptionalField::Present(value.into()),
            ..self
        }
    }

    pub fn with_min_length(self, min_length: u16) -> Self {
        Self {
            min_length: OptionalField::Present(min_length),
            ..self
        }
    }

    pub fn with_max_length(self, max_length: u16) -> Self {
        Self {
            max_length: OptionalField::Present(max_length),
            ..self
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self {
            required: OptionalField::Present(required),
            ..self
        }
    }

    /// Fails if the custom ID or label was never set.
    pub fn build(self) -> Result<TextInput, ValidationError> {
        let OptionalField::Present(custom_id) = self.custom_id else {
            return Err(ValidationError::Missing { field: "custom id" });
        };
        let OptionalField::Present(label) = self.label else {
            return Err(ValidationError::Missing { field: "label" });
        };

        Ok(TextInput {
            custom_id,
            style: self.style,
            label,
            min_length: self.min_length,
            max_length: self.max_length,
            required: self.required,
            value: self.value,
            placeholder: self.placeholder,
        })
    }
}

impl TryFrom<TextInputBuilder> for TextInput {
    type Error = ValidationError;

    fn try_from(builder: TextInputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

// ===========================================================================
// ModalBuilder
// ===========================================================================

/// Accumulates a modal shown in response to an interaction.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until dispatched"]
pub struct ModalBuilder {
    pub custom_id: OptionalField<String>,
    pub title: OptionalField<String>,
    pub forms: OptionalField<Vec<TextInput>>,
}

impl ModalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_id(self, custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: OptionalField::Present(custom_id.into()),
            ..self
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: OptionalField::Present(title.into()),
            ..self
        }
    }

    pub fn add_form(self, form: TextInput) -> Self {
        self.add_forms([form])
    }

    pub fn add_forms(self, forms: impl IntoIterator<Item = TextInput>) -> Self {
        Self {
            forms: append(self.forms, forms),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let OptionalField::Present(custom_id) = &self.custom_id else {
            return Err(ValidationError::Missing { field: "custom id" });
        };
        check_length("custom id", custom_id, MAX_CUSTOM_ID_LENGTH)?;

        let OptionalField::Present(title) = &self.title else {
            return Err(ValidationError::Missing { field: "title" });
        };
        check_length("title", title, MAX_MODAL_TITLE_LENGTH)?;

        let forms = match &self.forms {
            OptionalField::Present(forms) if !forms.is_empty() => forms,
            _ => return Err(ValidationError::Empty { field: "form" }),
        };
        if forms.len() > MAX_MODAL_FORMS {
            return Err(ValidationError::TooMany {
                field: "forms",
                limit: MAX_MODAL_FORMS,
                excess: forms.len() - MAX_MODAL_FORMS,
            });
        }

        Ok(())
    }
}
