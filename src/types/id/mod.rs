//! Typed snowflake IDs.
//!
//! Discord transmits snowflakes as strings. [`Id`] serializes them as strings
//! and accepts either strings or integers when deserializing.

pub mod marker;

use serde::{
    de::{Error as DeError, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::NonZeroU64,
    str::FromStr,
};

/// Unix timestamp in milliseconds of the first second of 2015, the epoch of
/// Discord snowflakes.
///
/// No genuine resource ID is numerically smaller than this.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// A non-zero snowflake tagged with the resource type it identifies.
pub struct Id<T> {
    phantom: PhantomData<fn(T) -> T>,
    value: NonZeroU64,
}

impl<T> Id<T> {
    /// Create an ID from a non-zero value.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero. Use [`Id::new_checked`] for untrusted input.
    #[track_caller]
    pub const fn new(n: u64) -> Self {
        match Self::new_checked(n) {
            Some(id) => id,
            None => panic!("value is zero"),
        }
    }

    /// Create an ID, returning `None` if `n` is zero.
    pub const fn new_checked(n: u64) -> Option<Self> {
        match NonZeroU64::new(n) {
            Some(value) => Some(Self::from_nonzero(value)),
            None => None,
        }
    }

    pub const fn from_nonzero(value: NonZeroU64) -> Self {
        Self {
            phantom: PhantomData,
            value,
        }
    }

    /// The raw snowflake value.
    pub const fn get(self) -> u64 {
        self.value.get()
    }

    /// Whether the raw value lies below [`DISCORD_EPOCH`].
    ///
    /// Such a value cannot have been issued by Discord.
    pub const fn predates_epoch(self) -> bool {
        self.get() < DISCORD_EPOCH
    }

    /// Reinterpret the ID as belonging to another resource type.
    pub const fn cast<New>(self) -> Id<New> {
        Id::from_nonzero(self.value)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.get());
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Id")?;
        let type_name = std::any::type_name::<T>();
        if let Some(position) = type_name.rfind("::") {
            if let Some(marker) = type_name.get(position + 2..) {
                f.write_str("<")?;
                f.write_str(marker)?;
                f.write_str(">")?;
            }
        }
        f.write_str("(")?;
        Debug::fmt(&self.value, f)?;
        f.write_str(")")
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

impl<T> From<NonZeroU64> for Id<T> {
    fn from(value: NonZeroU64) -> Self {
        Self::from_nonzero(value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NonZeroU64::from_str(s).map(Self::from_nonzero)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor<T>(PhantomData<fn(T) -> T>);

        impl<T> Visitor<'_> for IdVisitor<T> {
            type Value = Id<T>;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a non-zero snowflake as a string or integer")
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
                Id::new_checked(value).ok_or_else(|| E::custom("snowflake is zero"))
            }

            fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
                let value = u64::try_from(value).map_err(E::custom)?;
                self.visit_u64(value)
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor(PhantomData))
    }
}
