//! A field that is either absent or explicitly provided.
//!
//! Discord's REST API distinguishes between a key that was never sent and a
//! key sent with a "falsy" value (`false`, `0`, `""`). [`OptionalField`]
//! keeps those apart all the way from the builders to the wire structs in
//! [`crate::http`], which skip absent fields when serializing:
//!
//! ```ignore
//! #[serde(default, skip_serializing_if = "OptionalField::is_absent")]
//! pub content: OptionalField<String>,
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Either [`Absent`](OptionalField::Absent) or
/// [`Present`](OptionalField::Present) with a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionalField<T> {
    /// Never provided. Must not appear in an outbound payload.
    #[default]
    Absent,
    /// Explicitly provided, including empty or `false` values.
    Present(T),
}

impl<T> OptionalField<T> {
    /// Whether a value was provided.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the field was never provided.
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// The contained value, or `default` when absent.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// The contained value, or the result of `f` when absent.
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => f(),
        }
    }

    /// The contained value, or a freshly constructed `T::default()`.
    ///
    /// Sequence fields use this to start appending from an empty `Vec`.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    pub const fn as_ref(&self) -> OptionalField<&T> {
        match self {
            Self::Present(value) => OptionalField::Present(value),
            Self::Absent => OptionalField::Absent,
        }
    }

    pub fn as_deref(&self) -> OptionalField<&T::Target>
    where
        T: std::ops::Deref,
    {
        match self {
            Self::Present(value) => OptionalField::Present(value.deref()),
            Self::Absent => OptionalField::Absent,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionalField<U> {
        match self {
            Self::Present(value) => OptionalField::Present(f(value)),
            Self::Absent => OptionalField::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<T> for OptionalField<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T> From<Option<T>> for OptionalField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<OptionalField<T>> for Option<T> {
    fn from(value: OptionalField<T>) -> Self {
        match value {
            OptionalField::Present(value) => Some(value),
            OptionalField::Absent => None,
        }
    }
}

impl<T: Serialize> Serialize for OptionalField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            // Only reached when a container forgot `skip_serializing_if`.
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Present)
    }
}
