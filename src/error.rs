//! Errors produced by the builders and dispatch adapters.
//!
//! [`ValidationError`] is local and synchronous: a builder broke one of
//! Discord's structural limits. [`DispatchError`] adds the transport's own
//! error, carried through untouched.

use thiserror::Error;

use crate::types::InteractionCallbackType;

/// A builder violates a structural rule.
///
/// Length and count variants report how far over the limit the value is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be longer than {limit} characters (got {excess} too many)")]
    TooLong {
        field: &'static str,
        limit: usize,
        excess: usize,
    },

    #[error("cannot have more than {limit} {field} (got {excess} too many)")]
    TooMany {
        field: &'static str,
        limit: usize,
        excess: usize,
    },

    #[error("{field} must be set")]
    Missing { field: &'static str },

    #[error("at least one {field} must be provided")]
    Empty { field: &'static str },

    #[error("a channel message response needs at least one of content, embeds or components")]
    NoMessageBody,

    #[error("{0:?} responses need a modal builder for modals and no builder for pongs")]
    UnsupportedResponseKind(InteractionCallbackType),

    #[error("{field} {value} is timestamped before the Discord epoch")]
    BeforeEpoch { field: &'static str, value: u64 },

    #[error("end time must not be before start time")]
    EndBeforeStart,

    #[error("location must be set for external events")]
    ExternalWithoutLocation,

    #[error("a reply target cannot be set when editing a message")]
    ReplyOnEdit,
}

impl ValidationError {
    /// How many characters or items the value exceeds its limit by.
    pub const fn excess(&self) -> Option<usize> {
        match self {
            Self::TooLong { excess, .. } | Self::TooMany { excess, .. } => Some(*excess),
            _ => None,
        }
    }
}

/// Failure of a dispatch adapter.
#[derive(Debug, Error)]
pub enum DispatchError<E> {
    /// Validation failed before anything was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport reported an error; passed through verbatim.
    #[error(transparent)]
    Transport(E),
}

impl<E> DispatchError<E> {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Transport(_) => None,
        }
    }

    pub fn into_transport(self) -> Option<E> {
        match self {
            Self::Transport(error) => Some(error),
            Self::Validation(_) => None,
        }
    }
}
