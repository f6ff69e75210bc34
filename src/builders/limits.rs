//! Discord's structural limits and the checks the validators share.

use crate::error::ValidationError;
use crate::optional::OptionalField;

pub const MAX_CONTENT_LENGTH: usize = 2000;
pub const MAX_EMBEDS: usize = 10;
pub const MAX_ATTACHMENTS: usize = 10;
/// Action rows per message.
pub const MAX_ACTION_ROWS: usize = 5;
pub const MAX_WEBHOOK_USERNAME_LENGTH: usize = 32;
pub const MAX_THREAD_NAME_LENGTH: usize = 100;
pub const MAX_CUSTOM_ID_LENGTH: usize = 100;
pub const MAX_MODAL_TITLE_LENGTH: usize = 100;
pub const MAX_MODAL_FORMS: usize = 5;

/// Fails if `text` holds more than `limit` characters.
pub(crate) fn check_length(
    field: &'static str,
    text: &str,
    limit: usize,
) -> Result<(), ValidationError> {
    let length = text.chars().count();
    if length > limit {
        return Err(ValidationError::TooLong {
            field,
            limit,
            excess: length - limit,
        });
    }
    Ok(())
}

/// [`check_length`] on an optional field; absent passes.
pub(crate) fn check_optional_length(
    field: &'static str,
    text: &OptionalField<String>,
    limit: usize,
) -> Result<(), ValidationError> {
    match text {
        OptionalField::Present(text) => check_length(field, text, limit),
        OptionalField::Absent => Ok(()),
    }
}

/// Fails if a present sequence holds more than `limit` items.
pub(crate) fn check_count<T>(
    field: &'static str,
    items: &OptionalField<Vec<T>>,
    limit: usize,
) -> Result<(), ValidationError> {
    match items {
        OptionalField::Present(items) if items.len() > limit => Err(ValidationError::TooMany {
            field,
            limit,
            excess: items.len() - limit,
        }),
        _ => Ok(()),
    }
}

/// Appends `items` to a sequence field, creating it when absent.
pub(crate) fn append<T>(
    field: OptionalField<Vec<T>>,
    items: impl IntoIterator<Item = T>,
) -> OptionalField<Vec<T>> {
    let mut sequence = field.value_or_default();
    sequence.extend(items);
    OptionalField::Present(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_CONTENT_LENGTH);
        assert!(check_length("content", &text, MAX_CONTENT_LENGTH).is_ok());

        let text = "é".repeat(MAX_CONTENT_LENGTH + 2);
        let error = check_length("content", &text, MAX_CONTENT_LENGTH).unwrap_err();
        assert_eq!(error.excess(), Some(2));
    }

    #[test]
    fn absent_fields_pass() {
        assert!(check_optional_length("content", &OptionalField::Absent, 0).is_ok());
        assert!(check_count::<u8>("embeds", &OptionalField::Absent, 0).is_ok());
    }

    #[test]
    fn count_reports_excess() {
        let items = OptionalField::Present(vec![0u8; 13]);
        let error = check_count("embeds", &items, MAX_EMBEDS).unwrap_err();
        assert_eq!(
            error,
            ValidationError::TooMany {
                field: "embeds",
                limit: 10,
                excess: 3,
            }
        );
    }

    #[test]
    fn append_preserves_order_and_duplicates() {
        let field = append(OptionalField::Absent, [1, 2]);
        let field = append(field, [2, 1]);
        assert_eq!(field, OptionalField::Present(vec![1, 2, 2, 1]));
    }
}
