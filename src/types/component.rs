//! Message components: action rows, buttons, string selects and text inputs.
//!
//! Discord tags every component object with an integer `type`. The variant
//! structs don't carry that tag themselves; [`Component`]'s `Serialize` impl
//! writes it next to the flattened variant fields.

use serde::{Serialize, Serializer};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::optional::OptionalField;
use crate::types::id::{marker::EmojiMarker, Id};

/// Integer tag of a component on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
}

/// Any component that can appear in a message or modal.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
}

impl Component {
    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::Button(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::StringSelect,
            Self::TextInput(_) => ComponentType::TextInput,
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            #[serde(rename = "type")]
            kind: ComponentType,
            #[serde(flatten)]
            inner: &'a T,
        }

        let kind = self.kind();
        match self {
            Self::ActionRow(inner) => Tagged { kind, inner }.serialize(serializer),
            Self::Button(inner) => Tagged { kind, inner }.serialize(serializer),
            Self::SelectMenu(inner) => Tagged { kind, inner }.serialize(serializer),
            Self::TextInput(inner) => Tagged { kind, inner }.serialize(serializer),
        }
    }
}

impl From<ActionRow> for Component {
    fn from(row: ActionRow) -> Self {
        Self::ActionRow(row)
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<SelectMenu> for Component {
    fn from(select: SelectMenu) -> Self {
        Self::SelectMenu(select)
    }
}

impl From<TextInput> for Component {
    fn from(input: TextInput) -> Self {
        Self::TextInput(input)
    }
}

/// A group of components laid out on one row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionRow {
    pub components: Vec<Component>,
}

/// Wrap components in a single [`ActionRow`].
pub fn action_row(components: impl IntoIterator<Item = impl Into<Component>>) -> Component {
    Component::ActionRow(ActionRow {
        components: components.into_iter().map(Into::into).collect(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    /// Opens `url` instead of sending an interaction; has no custom ID.
    Link = 5,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub label: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub emoji: OptionalField<PartialEmoji>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub custom_id: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub url: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub disabled: OptionalField<bool>,
}

/// A string select menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectMenu {
    pub custom_id: String,
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub placeholder: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub min_values: OptionalField<u8>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub max_values: OptionalField<u8>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub disabled: OptionalField<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub description: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub emoji: OptionalField<PartialEmoji>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub default: OptionalField<bool>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: OptionalField::Absent,
            emoji: OptionalField::Absent,
            default: OptionalField::Absent,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = OptionalField::Present(description.into());
        self
    }

    pub fn emoji(mut self, emoji: PartialEmoji) -> Self {
        self.emoji = OptionalField::Present(emoji);
        self
    }

    /// Pre-select this option.
    pub fn default_selected(mut self, selected: bool) -> Self {
        self.default = OptionalField::Present(selected);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum TextInputStyle {
    /// Single line.
    #[default]
    Short = 1,
    /// Multiple lines.
    Paragraph = 2,
}

/// A text field inside a modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInput {
    pub custom_id: String,
    pub style: TextInputStyle,
    pub label: String,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub min_length: OptionalField<u16>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub max_length: OptionalField<u16>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub required: OptionalField<bool>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub value: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub placeholder: OptionalField<String>,
}

/// Emoji shown on a button or select option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialEmoji {
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub id: OptionalField<Id<EmojiMarker>>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub name: OptionalField<String>,
    #[serde(skip_serializing_if = "OptionalField::is_absent")]
    pub animated: OptionalField<bool>,
}

impl PartialEmoji {
    /// A standard Unicode emoji such as `"👍"`.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: OptionalField::Absent,
            name: OptionalField::Present(name.into()),
            animated: OptionalField::Absent,
        }
    }

    /// A guild's custom emoji.
    pub fn custom(id: Id<EmojiMarker>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: OptionalField::Present(id),
            name: OptionalField::Present(name.into()),
            animated: OptionalField::Present(animated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link() -> Button {
        Button {
            style: ButtonStyle::Link,
            label: OptionalField::Present("Docs".to_owned()),
            emoji: OptionalField::Absent,
            custom_id: OptionalField::Absent,
            url: OptionalField::Present("https://discord.com/developers".to_owned()),
            disabled: OptionalField::Absent,
        }
    }

    #[test]
    fn button_serializes_with_type_tag() {
        let value = serde_json::to_value(Component::from(link())).unwrap();
        assert_eq!(
            value,
            json!({
                "type": 2,
                "style": 5,
                "label": "Docs",
                "url": "https://discord.com/developers",
            })
        );
    }

    #[test]
    fn action_row_nests_components() {
        let row = action_row([link(), link()]);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], 1);
        assert_eq!(value["components"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["components"][0]["type"], 2);
    }

    #[test]
    fn select_option_omits_absent_fields() {
        let option = SelectOption::new("Red", "red").default_selected(false);
        let value = serde_json::to_value(&option).unwrap();
        assert_eq!(
            value,
            json!({ "label": "Red", "value": "red", "default": false })
        );
    }

    #[test]
    fn custom_emoji_serializes_id_as_string() {
        let emoji = PartialEmoji::custom(Id::new(41_771_983_429_993_937), "LUL", false);
        let value = serde_json::to_value(&emoji).unwrap();
        assert_eq!(value["id"], "41771983429993937");
    }

    #[test]
    fn text_input_style_defaults_to_short() {
        assert_eq!(TextInputStyle::default(), TextInputStyle::Short);
        serde_test::assert_ser_tokens(&TextInputStyle::Paragraph, &[serde_test::Token::U8(2)]);
    }
}
