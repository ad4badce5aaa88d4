//! Acrely notification engine.
//!
//! Turns classified webhook events into outbound WhatsApp messages:
//!
//! - [`provider`] — the [`EnrichmentProvider`] seam for fetching user and
//!   property records, with the Postgres implementation.
//! - [`channel`] — the [`NotificationChannel`] seam for sending direct and
//!   group messages.
//! - [`whatsapp`] — the HTTP gateway channel implementation.
//! - [`templates`] — pure message composition per event kind.
//! - [`dispatch`] — the [`DispatchCoordinator`] orchestrating
//!   classify → enrich → compose → send with best-effort semantics.

pub mod channel;
pub mod dispatch;
pub mod provider;
pub mod templates;
pub mod whatsapp;

pub use channel::{ChannelError, NotificationChannel};
pub use dispatch::{DispatchConfig, DispatchCoordinator, DispatchError, DispatchResult};
pub use provider::{EnrichmentError, EnrichmentProvider, PgEnrichment};
pub use whatsapp::WhatsAppGateway;
