//! Event kind enumeration for inbound user-action webhooks.
//!
//! The upstream platform reports user actions as SCREAMING_SNAKE_CASE
//! strings. The set below is closed: any string outside it deserializes to
//! [`EventKind::Unknown`] rather than failing, because the webhook must be
//! acknowledged even for event types this service does not understand
//! (otherwise the producer retries indefinitely).

use serde::{Deserialize, Serialize};

/// Coarse grouping of event kinds, used for routing and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    PropertyInteraction,
    Construction,
    Rental,
    Search,
    Unknown,
}

impl EventCategory {
    /// Stable string form, matching the upstream analytics vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::PropertyInteraction => "property_interaction",
            EventCategory::Construction => "construction",
            EventCategory::Rental => "rental",
            EventCategory::Search => "search",
            EventCategory::Unknown => "unknown",
        }
    }
}

/// A user action reported by the upstream platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The user pressed "call" on a property listing.
    #[serde(rename = "CALL_PRESSED_PROPERTY")]
    PropertyCallPressed,

    /// The user pressed "WhatsApp" on a property listing.
    #[serde(rename = "WHATS_APP_PRESSED_PROPERTY")]
    PropertyWhatsAppPressed,

    /// The user pressed "call" on the construction-services page.
    #[serde(rename = "CONSTRUCTION_CALL_PRESSED")]
    ConstructionCallPressed,

    /// The user pressed "WhatsApp" on the construction-services page.
    #[serde(rename = "CONSTRUCTION_WHATS_APP_PRESSED")]
    ConstructionWhatsAppPressed,

    /// The user downloaded a construction brochure.
    #[serde(rename = "CONSTRUCTION_BROCHURE_DOWNLOADED")]
    ConstructionBrochureDownloaded,

    /// The user pressed "post a rental property".
    #[serde(rename = "POST_RENTAL_PROPERTY_PRESSED")]
    PostRentalPropertyPressed,

    /// The user asked for a custom property search.
    #[serde(rename = "CUSTOM_PROPERTY_SEARCH_REQUEST")]
    CustomPropertySearchRequest,

    /// Catch-all for event strings this service does not recognize.
    /// Deserialization never fails on an unknown kind.
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Whether this kind is meaningless without a property id.
    ///
    /// True only for the two property-interaction kinds; a missing id there
    /// degrades the action to a warning but does not fail the request.
    pub fn requires_property_id(&self) -> bool {
        matches!(
            self,
            EventKind::PropertyCallPressed | EventKind::PropertyWhatsAppPressed
        )
    }

    /// The coarse category this kind belongs to.
    pub fn category(&self) -> EventCategory {
        match self {
            EventKind::PropertyCallPressed | EventKind::PropertyWhatsAppPressed => {
                EventCategory::PropertyInteraction
            }
            EventKind::ConstructionCallPressed
            | EventKind::ConstructionWhatsAppPressed
            | EventKind::ConstructionBrochureDownloaded => EventCategory::Construction,
            EventKind::PostRentalPropertyPressed => EventCategory::Rental,
            EventKind::CustomPropertySearchRequest => EventCategory::Search,
            EventKind::Unknown => EventCategory::Unknown,
        }
    }

    /// Whether this kind is one of the recognized (non-`Unknown`) values.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, EventKind::Unknown)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_from_str(s: &str) -> EventKind {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .expect("EventKind deserialization must never fail")
    }

    #[test]
    fn known_wire_strings_map_to_kinds() {
        assert_eq!(
            kind_from_str("CALL_PRESSED_PROPERTY"),
            EventKind::PropertyCallPressed
        );
        assert_eq!(
            kind_from_str("WHATS_APP_PRESSED_PROPERTY"),
            EventKind::PropertyWhatsAppPressed
        );
        assert_eq!(
            kind_from_str("CONSTRUCTION_CALL_PRESSED"),
            EventKind::ConstructionCallPressed
        );
        assert_eq!(
            kind_from_str("CONSTRUCTION_WHATS_APP_PRESSED"),
            EventKind::ConstructionWhatsAppPressed
        );
        assert_eq!(
            kind_from_str("CONSTRUCTION_BROCHURE_DOWNLOADED"),
            EventKind::ConstructionBrochureDownloaded
        );
        assert_eq!(
            kind_from_str("POST_RENTAL_PROPERTY_PRESSED"),
            EventKind::PostRentalPropertyPressed
        );
        assert_eq!(
            kind_from_str("CUSTOM_PROPERTY_SEARCH_REQUEST"),
            EventKind::CustomPropertySearchRequest
        );
    }

    #[test]
    fn unrecognized_strings_classify_to_unknown_not_error() {
        assert_eq!(kind_from_str("SOMETHING_NEW"), EventKind::Unknown);
        assert_eq!(kind_from_str(""), EventKind::Unknown);
        assert_eq!(kind_from_str("call_pressed_property"), EventKind::Unknown);
    }

    #[test]
    fn only_property_kinds_require_a_property_id() {
        assert!(EventKind::PropertyCallPressed.requires_property_id());
        assert!(EventKind::PropertyWhatsAppPressed.requires_property_id());

        assert!(!EventKind::ConstructionCallPressed.requires_property_id());
        assert!(!EventKind::ConstructionWhatsAppPressed.requires_property_id());
        assert!(!EventKind::ConstructionBrochureDownloaded.requires_property_id());
        assert!(!EventKind::PostRentalPropertyPressed.requires_property_id());
        assert!(!EventKind::CustomPropertySearchRequest.requires_property_id());
        assert!(!EventKind::Unknown.requires_property_id());
    }

    #[test]
    fn categories_match_the_upstream_vocabulary() {
        assert_eq!(
            EventKind::PropertyCallPressed.category().as_str(),
            "property_interaction"
        );
        assert_eq!(
            EventKind::ConstructionBrochureDownloaded.category().as_str(),
            "construction"
        );
        assert_eq!(
            EventKind::PostRentalPropertyPressed.category().as_str(),
            "rental"
        );
        assert_eq!(
            EventKind::CustomPropertySearchRequest.category().as_str(),
            "search"
        );
        assert_eq!(EventKind::Unknown.category().as_str(), "unknown");
    }
}
