//! HTTP handlers.

pub mod webhooks;
