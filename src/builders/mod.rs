//! Immutable, fluent builders for every outbound payload kind.
//!
//! Every mutator takes the builder by value and returns the updated one, so
//! a builder is never changed behind a caller's back. To reuse one as a
//! template, clone it before chaining:
//!
//! ```ignore
//! let base = MessageBuilder::new().with_allowed_mentions(AllowedMentions::none());
//! let first = base.clone().with_content("first");
//! let second = base.with_content("second");
//! ```
//!
//! Payload builders expose `validate()`. Component builders (buttons,
//! selects, text inputs) only check required fields in `build()`; their
//! limits are enforced by the payload that contains them.

pub mod limits;

mod button;
mod interaction;
mod message;
mod modal;
mod scheduled_event;
mod select;
mod webhook;

pub use self::button::ButtonBuilder;
pub use self::interaction::InteractionBuilder;
pub use self::message::MessageBuilder;
pub use self::modal::{ModalBuilder, TextInputBuilder};
pub use self::scheduled_event::ScheduledEventBuilder;
pub use self::select::SelectBuilder;
pub use self::webhook::WebhookBuilder;
