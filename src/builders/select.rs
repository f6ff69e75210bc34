//! Builder for string select menus.

use crate::builders::limits::append;
use crate::error::ValidationError;
use crate::optional::OptionalField;
use crate::types::{SelectMenu, SelectOption};

#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders do nothing until built"]
pub struct SelectBuilder {
    pub custom_id: OptionalField<String>,
    pub options: OptionalField<Vec<SelectOption>>,
    pub placeholder: OptionalField<String>,
    pub min_values: OptionalField<u8>,
    pub max_values: OptionalField<u8>,
    pub disabled: OptionalField<bool>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_id(self, custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: OptionalField::Present(custom_id.into()),
            ..self
        }
    }

    pub fn add_option(self, option: SelectOption) -> Self {
        self.add_options([option])
    }

    pub fn add_options(self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            options: append(self.options, options),
            ..self
        }
    }

    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: OptionalField::Present(placeholder.into()),
            ..self
        }
    }

    pub fn with_min_values(self, min_values: u8) -> Self {
        Self {
            min_values: OptionalField::Present(min_values),
            ..self
        }
    }

    pub fn with_max_values(self, max_values: u8) -> Self {
        Self {
            max_values: OptionalField::Present(max_values),
            ..self
        }
    }

    pub fn disable(self) -> Self {
        Self {
            disabled: OptionalField::Present(true),
            ..self
        }
    }

    pub fn enable(self) -> Self {
        Self {
            disabled: OptionalField::Present(false),
            ..self
        }
    }

    /// Fails if the custom ID or the options were never set.
    pub fn build(self) -> Result<SelectMenu, ValidationError> {
        let OptionalField::Present(custom_id) = self.custom_id else {
            return Err(ValidationError::Missing { field: "custom id" });
        };
        let OptionalField::Present(options) = self.options else {
            return Err(ValidationError::Missing { field: "options" });
        };

        Ok(SelectMenu {
            custom_id,
            options,
            placeholder: self.placeholder,
            min_values: self.min_values,
            max_values: self.max_values,
            disabled: self.disabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_options_appends_to_existing() {
        let select = SelectBuilder::new()
            .with_custom_id("size")
            .add_option(SelectOption::new("Small", "s"))
            .add_options([
                SelectOption::new("Medium", "m"),
                SelectOption::new("Large", "l"),
            ])
            .build()
            .unwrap();
        let values: Vec<_> = select.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["s", "m", "l"]);
    }

    #[test]
    fn enable_and_disable_are_explicit() {
        let builder = SelectBuilder::new().disable();
        assert_eq!(builder.disabled, OptionalField::Present(true));
        let builder = builder.enable();
        assert_eq!(builder.disabled, OptionalField::Present(false));
    }

    #[test]
    fn build_requires_custom_id_and_options() {
        assert_eq!(
            SelectBuilder::new()
                .add_option(SelectOption::new("a", "a"))
                .build(),
            Err(ValidationError::Missing { field: "custom id" })
        );
        assert_eq!(
            SelectBuilder::new().with_custom_id("x").build(),
            Err(ValidationError::Missing { field: "options" })
        );
    }

    #[test]
    fn value_bounds_pass_through() {
        let select = SelectBuilder::new()
            .with_custom_id("tags")
            .add_option(SelectOption::new("a", "a"))
            .with_min_values(0)
            .with_max_values(3)
            .with_placeholder("Pick tags")
            .build()
            .unwrap();
        assert_eq!(select.min_values, OptionalField::Present(0));
        assert_eq!(select.max_values, OptionalField::Present(3));
        assert!(select.disabled.is_absent());
    }
}
