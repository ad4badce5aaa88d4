//! Dispatch coordination: classify → enrich → compose → send.
//!
//! [`DispatchCoordinator`] owns the two collaborator seams
//! ([`EnrichmentProvider`], [`NotificationChannel`]) via constructor
//! injection and is stateless per call: no retries, no cross-request state,
//! and no deduplication of redelivered webhooks (an at-least-once producer
//! can therefore cause duplicate notifications).
//!
//! Failure semantics, per flow:
//!
//! - Validation failures reject before any collaborator is touched.
//! - Enrichment of the subject user is mandatory; its failure aborts the
//!   dispatch with nothing sent.
//! - Every send is best-effort: failures are recorded in the
//!   [`DispatchResult`] (and logged) but never fail the dispatch. The
//!   webhook has been accepted by then; messaging is an auxiliary effect.
//! - A failed property lookup inside the per-kind branch is demoted to a
//!   warning plus an internal alert, because the log-ingestion contract is
//!   "acknowledge the event", not "resolve every foreign key".

use std::sync::Arc;

use serde::Serialize;

use acrely_core::payload::{SellRequestEvent, UserEvent};
use acrely_core::{CoreError, EventKind};
use acrely_db::models::User;

use crate::channel::NotificationChannel;
use crate::provider::{EnrichmentError, EnrichmentProvider};
use crate::templates;

// ---------------------------------------------------------------------------
// Results and errors
// ---------------------------------------------------------------------------

/// Outcome of one dispatch, returned to the HTTP layer for serialization.
///
/// Send failures are recorded here, never propagated as fatal.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    /// What the coordinator did with the event.
    pub action: &'static str,

    /// Error from the internal-group send, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_send_error: Option<String>,

    /// Error from the user-facing send, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_send_error: Option<String>,

    /// Degraded-but-handled condition, e.g. a missing property id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

impl DispatchResult {
    fn new(action: &'static str) -> Self {
        Self {
            action,
            internal_send_error: None,
            user_send_error: None,
            warning: None,
        }
    }
}

/// A dispatch failed before any message could be considered.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The event payload was invalid.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The mandatory subject-record lookup failed.
    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Process-wide dispatch settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// The fixed operations-group chat id.
    pub internal_group_id: String,

    /// Base URL for property listing links in internal alerts.
    pub property_link_base: String,

    /// When set, all user-facing sends go to this number instead of the
    /// enriched user's phone. Deployment/testing knob, off by default.
    pub test_recipient_override: Option<String>,
}

// ---------------------------------------------------------------------------
// Coordinator
// ---------------------------------------------------------------------------

/// Orchestrates enrichment, composition, and delivery for webhook events.
pub struct DispatchCoordinator {
    provider: Arc<dyn EnrichmentProvider>,
    channel: Arc<dyn NotificationChannel>,
    config: DispatchConfig,
}

impl DispatchCoordinator {
    pub fn new(
        provider: Arc<dyn EnrichmentProvider>,
        channel: Arc<dyn NotificationChannel>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            provider,
            channel,
            config,
        }
    }

    /// Handle a sell-request webhook.
    ///
    /// Fetches the user, then issues the internal-group alert and the user
    /// acknowledgment concurrently. Both sends are recorded in the result;
    /// neither failing fails the dispatch.
    pub async fn dispatch_sell_request(
        &self,
        event: &SellRequestEvent,
    ) -> Result<DispatchResult, DispatchError> {
        event.validate()?;

        let user = self.provider.fetch_user(&event.user_id).await?;
        let messages = templates::sell_request_messages(&user, event);
        let recipient = self.user_recipient(&user);

        let mut result = DispatchResult::new("sell_request_processed");
        match messages.user {
            Some(reply) => {
                // Independent sends; the result must reflect each outcome
                // individually, so both are awaited before returning.
                let (internal_err, user_err) = tokio::join!(
                    self.send_internal(&messages.internal),
                    self.send_user(recipient, &reply),
                );
                result.internal_send_error = internal_err;
                result.user_send_error = user_err;
            }
            None => {
                result.internal_send_error = self.send_internal(&messages.internal).await;
            }
        }

        tracing::info!(
            user_id = %event.user_id,
            internal_ok = result.internal_send_error.is_none(),
            user_ok = result.user_send_error.is_none(),
            "Sell request dispatched"
        );
        Ok(result)
    }

    /// Handle a user-action log webhook, branching on the event kind.
    pub async fn dispatch_user_event(
        &self,
        event: &UserEvent,
    ) -> Result<DispatchResult, DispatchError> {
        event.validate()?;

        let user = self.provider.fetch_user(&event.user_id).await?;

        let result = match event.event_type {
            EventKind::PropertyCallPressed | EventKind::PropertyWhatsAppPressed => {
                self.handle_property_interest(event, &user).await
            }
            EventKind::Unknown => {
                tracing::info!(
                    user_id = %event.user_id,
                    "Unrecognized event type, acknowledging without notification"
                );
                let mut result = DispatchResult::new("unknown_event_type");
                result.warning = Some("event type not recognized");
                result
            }
            kind => self.handle_templated_kind(kind, &user).await,
        };

        tracing::info!(
            user_id = %event.user_id,
            category = event.event_type.category().as_str(),
            action = result.action,
            "User event dispatched"
        );
        Ok(result)
    }

    /// Property call/WhatsApp press: enrich the property, alert operations.
    ///
    /// A missing or unresolvable property id degrades the action but never
    /// fails the request.
    async fn handle_property_interest(&self, event: &UserEvent, user: &User) -> DispatchResult {
        let Some(property_id) = event.property_id else {
            tracing::warn!(
                user_id = %event.user_id,
                "Property event arrived without a property id"
            );
            let mut result = DispatchResult::new("property_interest_logged");
            result.warning = Some("property id required but missing");
            return result;
        };

        match self.provider.fetch_property(property_id).await {
            Ok(property) => {
                let mut result = DispatchResult::new("property_interest_alerted");
                if let Some(messages) = templates::compose(
                    event.event_type,
                    user,
                    Some(&property),
                    &self.config.property_link_base,
                ) {
                    result.internal_send_error = self.send_internal(&messages.internal).await;
                }
                result
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %event.user_id,
                    property_id,
                    error = %e,
                    "Property lookup failed, alerting operations group"
                );
                let alert =
                    templates::property_lookup_failure_alert(user, property_id, &e.to_string());
                let mut result = DispatchResult::new("property_interest_logged");
                result.internal_send_error = self.send_internal(&alert).await;
                result.warning = Some("property lookup failed");
                result
            }
        }
    }

    /// Kinds whose messages need no property record: construction, rental,
    /// custom search. Sends the internal alert and, when the template has
    /// one, the user reply.
    async fn handle_templated_kind(&self, kind: EventKind, user: &User) -> DispatchResult {
        let action = match kind.category() {
            acrely_core::EventCategory::Construction => "construction_inquiry_notified",
            acrely_core::EventCategory::Rental => "rental_posting_notified",
            acrely_core::EventCategory::Search => "custom_search_notified",
            _ => "unknown_event_type",
        };
        let mut result = DispatchResult::new(action);

        let Some(messages) =
            templates::compose(kind, user, None, &self.config.property_link_base)
        else {
            return result;
        };

        match messages.user {
            Some(reply) => {
                let recipient = self.user_recipient(user);
                let (internal_err, user_err) = tokio::join!(
                    self.send_internal(&messages.internal),
                    self.send_user(recipient, &reply),
                );
                result.internal_send_error = internal_err;
                result.user_send_error = user_err;
            }
            None => {
                result.internal_send_error = self.send_internal(&messages.internal).await;
            }
        }
        result
    }

    /// The user-facing recipient: the override when configured, otherwise
    /// the enriched user's own phone.
    fn user_recipient<'a>(&'a self, user: &'a User) -> &'a str {
        self.config
            .test_recipient_override
            .as_deref()
            .unwrap_or(&user.phone)
    }

    /// Best-effort send to the operations group. Failure is logged and
    /// returned for the result record; it never aborts the dispatch.
    async fn send_internal(&self, text: &str) -> Option<String> {
        match self
            .channel
            .send_to_group(&self.config.internal_group_id, text)
            .await
        {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    group_id = %self.config.internal_group_id,
                    error = %e,
                    "Internal group send failed"
                );
                Some(e.to_string())
            }
        }
    }

    /// Send the user-facing reply. Failure is recorded in the result; the
    /// webhook has already been accepted by this point.
    async fn send_user(&self, recipient: &str, text: &str) -> Option<String> {
        match self.channel.send_direct(recipient, text).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(recipient, error = %e, "User-facing send failed");
                Some(e.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
