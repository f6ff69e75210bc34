//! Async adapters that turn builders into transport calls.
//!
//! Every adapter follows the same three steps: optionally validate, project
//! the builder into a flat request, make exactly one transport call. A
//! validation failure returns before the transport is touched; a transport
//! failure comes back unchanged inside
//! [`DispatchError::Transport`](crate::error::DispatchError::Transport).
//!
//! Adapters hold no state, so dropping the returned future cancels the
//! dispatch.

use tracing::warn;

use crate::error::ValidationError;

pub mod channel;
pub mod interaction;
pub mod scheduled_event;
pub mod webhook;

#[cfg(test)]
pub(crate) mod mock;

/// Per-call dispatch settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Run the builder's `validate()` before sending. Off by default.
    pub validate: bool,
}

impl DispatchOptions {
    /// Options with validation enabled.
    pub const fn validated() -> Self {
        Self { validate: true }
    }
}

/// Runs `check` if validation is enabled, logging the failure.
pub(crate) fn gate(
    options: DispatchOptions,
    route: &'static str,
    check: impl FnOnce() -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    if !options.validate {
        return Ok(());
    }
    check().map_err(|error| {
        warn!(route, error = %error, "payload failed validation, not sending");
        error
    })
}
