//! Inbound webhook payload shapes and the pure event classifier.
//!
//! The upstream platform delivers database-change webhooks in a fixed
//! envelope: `type`/`table`/`schema`/`old_record` metadata around a
//! `record` field holding the actual row. Only `record` matters here; the
//! metadata is accepted and ignored.
//!
//! Classification is a pure function of the payload: it either produces a
//! validated event or a [`CoreError::Validation`]. It never touches the
//! database or the notification channel.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::event::EventKind;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Outer webhook payload wrapping an event record.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEnvelope<T> {
    /// Change type reported by the producer (e.g. `"INSERT"`). Ignored.
    #[serde(rename = "type", default)]
    pub change_type: Option<String>,

    /// Source table name. Ignored.
    #[serde(default)]
    pub table: Option<String>,

    /// Source schema name. Ignored.
    #[serde(default)]
    pub schema: Option<String>,

    /// The event record itself.
    pub record: T,
}

// ---------------------------------------------------------------------------
// Event shapes
// ---------------------------------------------------------------------------

/// A sell-request row delivered by the sell-request webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellRequestEvent {
    /// Upstream row id.
    #[serde(default)]
    pub id: Option<i64>,

    /// Id of the user who submitted the request. Required, non-empty.
    pub user_id: String,

    #[serde(default)]
    pub notes: Option<String>,

    /// Asking price as entered by the user (free text, e.g. `"50L"`).
    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub property_type: String,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl SellRequestEvent {
    /// Reject the event before any enrichment or send is attempted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.user_id.trim().is_empty() {
            return Err(CoreError::Validation("user_id is required".into()));
        }
        Ok(())
    }
}

/// A user-action log row delivered by the user-logs webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEvent {
    /// Upstream row id.
    #[serde(default)]
    pub id: Option<i64>,

    /// Id of the user who performed the action. Required, non-empty.
    pub user_id: String,

    /// The action kind. Unrecognized strings decode to [`EventKind::Unknown`].
    pub event_type: EventKind,

    /// Property the action refers to, for kinds that have one.
    #[serde(default)]
    pub property_id: Option<i64>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserEvent {
    /// Reject the event before any enrichment or send is attempted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.user_id.trim().is_empty() {
            return Err(CoreError::Validation("user_id is required".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classify a raw sell-request webhook payload.
///
/// Malformed shape or an empty `user_id` fail with
/// [`CoreError::Validation`]; everything else succeeds.
pub fn classify_sell_request(raw: &serde_json::Value) -> Result<SellRequestEvent, CoreError> {
    let envelope: WebhookEnvelope<SellRequestEvent> = serde_json::from_value(raw.clone())?;
    envelope.record.validate()?;
    Ok(envelope.record)
}

/// Classify a raw user-logs webhook payload.
///
/// An unrecognized `event_type` string is not an error: the event
/// classifies to [`EventKind::Unknown`] and the caller decides how to
/// degrade. Only a malformed shape or an empty `user_id` fail.
pub fn classify_user_event(raw: &serde_json::Value) -> Result<UserEvent, CoreError> {
    let envelope: WebhookEnvelope<UserEvent> = serde_json::from_value(raw.clone())?;
    envelope.record.validate()?;
    Ok(envelope.record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn classify_sell_request_accepts_full_envelope() {
        let raw = serde_json::json!({
            "type": "INSERT",
            "table": "sell_requests",
            "schema": "public",
            "old_record": null,
            "record": {
                "id": 7,
                "user_id": "u1",
                "price": "50L",
                "address": "MG Road",
                "property_type": "Plot"
            }
        });

        let event = classify_sell_request(&raw).expect("valid payload must classify");
        assert_eq!(event.user_id, "u1");
        assert_eq!(event.price, "50L");
        assert_eq!(event.address, "MG Road");
        assert_eq!(event.property_type, "Plot");
    }

    #[test]
    fn classify_sell_request_rejects_empty_user_id() {
        let raw = serde_json::json!({
            "record": { "user_id": "", "price": "10L" }
        });

        let err = classify_sell_request(&raw).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("user_id"));
    }

    #[test]
    fn classify_sell_request_rejects_whitespace_user_id() {
        let raw = serde_json::json!({ "record": { "user_id": "   " } });
        assert_matches!(
            classify_sell_request(&raw),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn classify_sell_request_rejects_malformed_shape() {
        let raw = serde_json::json!({ "not_a_record": true });
        let err = classify_sell_request(&raw).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Invalid JSON payload"));
    }

    #[test]
    fn classify_user_event_tolerates_unknown_kind() {
        let raw = serde_json::json!({
            "record": { "user_id": "u2", "event_type": "BRAND_NEW_EVENT" }
        });

        let event = classify_user_event(&raw).expect("unknown kind must still classify");
        assert_eq!(event.event_type, EventKind::Unknown);
        assert_eq!(event.property_id, None);
    }

    #[test]
    fn classify_user_event_decodes_property_id() {
        let raw = serde_json::json!({
            "record": {
                "user_id": "u3",
                "event_type": "CALL_PRESSED_PROPERTY",
                "property_id": 42
            }
        });

        let event = classify_user_event(&raw).unwrap();
        assert_eq!(event.event_type, EventKind::PropertyCallPressed);
        assert_eq!(event.property_id, Some(42));
    }

    #[test]
    fn classify_user_event_rejects_empty_user_id() {
        let raw = serde_json::json!({
            "record": { "user_id": "", "event_type": "CALL_PRESSED_PROPERTY" }
        });
        assert_matches!(classify_user_event(&raw), Err(CoreError::Validation(_)));
    }

    #[test]
    fn envelope_metadata_is_optional() {
        // Producers sometimes send the bare record wrapper with no metadata.
        let raw = serde_json::json!({
            "record": { "user_id": "u4", "event_type": "POST_RENTAL_PROPERTY_PRESSED" }
        });

        let event = classify_user_event(&raw).unwrap();
        assert_eq!(event.event_type, EventKind::PostRentalPropertyPressed);
    }
}
