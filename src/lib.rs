//! Fluent builders for outbound Discord REST payloads.
//!
//! Payloads are assembled with immutable builders in [`builders`], checked
//! against Discord's structural limits with `validate()`, and sent through
//! the async adapters in [`dispatch`]. The adapters speak to any transport
//! implementing the traits in [`http`]; this crate performs no I/O itself.
//!
//! ```ignore
//! use discord_builders::{dispatch, DispatchOptions, MessageBuilder};
//!
//! let message = MessageBuilder::new()
//!     .with_content("Build passed")
//!     .with_reply_to(trigger_id);
//! dispatch::channel::create_message(&rest, channel_id, message, DispatchOptions::validated())
//!     .await?;
//! ```

pub mod builders;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod optional;
pub mod types;

pub use builders::{
    ButtonBuilder, InteractionBuilder, MessageBuilder, ModalBuilder, ScheduledEventBuilder,
    SelectBuilder, TextInputBuilder, WebhookBuilder,
};
pub use dispatch::DispatchOptions;
pub use error::{DispatchError, ValidationError};
pub use optional::OptionalField;
