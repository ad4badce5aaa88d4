//! Acrely shared domain model.
//!
//! This crate holds the pure, side-effect-free part of the webhook
//! notification engine:
//!
//! - [`event`] — the closed [`event::EventKind`] enumeration and its
//!   per-kind metadata.
//! - [`payload`] — inbound webhook payload shapes and the pure event
//!   classifier.
//! - [`error`] — the domain error taxonomy shared by all layers.

pub mod error;
pub mod event;
pub mod payload;

pub use error::CoreError;
pub use event::{EventCategory, EventKind};
pub use payload::{SellRequestEvent, UserEvent, WebhookEnvelope};
