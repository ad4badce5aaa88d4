//! Message composition for every event kind.
//!
//! Everything here is a pure function: identical input yields byte-identical
//! output, with no clock or randomness. Internal-group messages use
//! WhatsApp `*bold*` field labels and carry the structured fields the
//! operations team works from; user-facing messages are fixed templates
//! with a greeting and a signature line, and contain no PII beyond the
//! recipient's own name.
//!
//! Name substitution rule, applied uniformly: an empty `user.name` becomes
//! "Sir/Madam" in internal copy and "Valued Customer" in user-facing copy.

use acrely_core::payload::SellRequestEvent;
use acrely_core::EventKind;
use acrely_db::models::{Property, User};

/// Signature appended to every user-facing message.
const SIGNATURE: &str = "Best regards,\nAcrely Team";

/// The internal-group message and optional user-facing reply for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessages {
    /// Alert for the fixed operations group.
    pub internal: String,
    /// Templated reply to the originating user, for kinds that send one.
    pub user: Option<String>,
}

/// Display name for internal copy: "Sir/Madam" when the profile has none.
fn internal_name(user: &User) -> &str {
    if user.name.trim().is_empty() {
        "Sir/Madam"
    } else {
        &user.name
    }
}

/// Greeting line for user-facing copy: "Hello Valued Customer," fallback.
fn greeting(user: &User) -> String {
    if user.name.trim().is_empty() {
        "Hello Valued Customer,".to_string()
    } else {
        format!("Hello {},", user.name)
    }
}

// ---------------------------------------------------------------------------
// Sell-request flow
// ---------------------------------------------------------------------------

/// Compose both messages for the sell-request flow.
///
/// The internal alert and the user acknowledgment are always both present.
pub fn sell_request_messages(user: &User, event: &SellRequestEvent) -> ComposedMessages {
    let internal = format!(
        "🏠 *New Sell Request Received*\n\
         👤 *Name:* {}\n\
         🏘 *Property Type:* {}\n\
         📍 *Address:* {}\n\
         💰 *Price:* {}\n\
         📞 *Phone:* {}",
        internal_name(user),
        event.property_type,
        event.address,
        event.price,
        user.phone,
    );

    let user_message = format!(
        "{}\n\
         We have received your request to sell your property on Acrely.\n\
         Please share the following details so we can list it:\n\
         \n\
         - Property size\n\
         - Type of property (NA plot, Gunta, etc.)\n\
         - Facing of the property\n\
         - Google Map location\n\
         - 2-3 photos of the property\n\
         - Ownership document copy (for our records)\n\
         \n\
         If you have any questions, feel free to call us.\n\
         \n\
         {SIGNATURE}",
        greeting(user),
    );

    ComposedMessages {
        internal,
        user: Some(user_message),
    }
}

// ---------------------------------------------------------------------------
// User-event flows
// ---------------------------------------------------------------------------

/// Compose the message(s) for a user-event kind.
///
/// Returns `None` for [`EventKind::Unknown`] (nothing is sent) and for the
/// property-interaction kinds when no property record is available — the
/// property-specific alert cannot be composed without one.
pub fn compose(
    kind: EventKind,
    user: &User,
    property: Option<&Property>,
    property_link_base: &str,
) -> Option<ComposedMessages> {
    match kind {
        EventKind::PropertyCallPressed | EventKind::PropertyWhatsAppPressed => {
            property.map(|p| property_interest_alert(kind, user, p, property_link_base))
        }
        EventKind::ConstructionCallPressed | EventKind::ConstructionWhatsAppPressed => {
            Some(construction_messages(user))
        }
        // The user already has the brochure; alert operations only.
        EventKind::ConstructionBrochureDownloaded => Some(ComposedMessages {
            internal: construction_internal_alert(user),
            user: None,
        }),
        EventKind::PostRentalPropertyPressed => Some(rental_posting_messages(user)),
        EventKind::CustomPropertySearchRequest => Some(custom_search_messages(user)),
        EventKind::Unknown => None,
    }
}

/// Internal alert for a property call/WhatsApp press. No user reply: the
/// operations team calls the user directly.
fn property_interest_alert(
    kind: EventKind,
    user: &User,
    property: &Property,
    property_link_base: &str,
) -> ComposedMessages {
    let contact = match kind {
        EventKind::PropertyWhatsAppPressed => "WhatsApp",
        _ => "Call",
    };

    let internal = format!(
        "📣 *Property Interest ({contact})*\n\
         👤 *Name:* {}\n\
         📞 *Phone:* {}\n\
         🏘 *Property:* #{} {}\n\
         📐 *Size:* {}\n\
         🔗 {}/{}",
        internal_name(user),
        user.phone,
        property.id,
        property.title,
        property.size,
        property_link_base.trim_end_matches('/'),
        property.id,
    );

    ComposedMessages {
        internal,
        user: None,
    }
}

/// Internal alert sent when a property lookup fails mid-dispatch, so the
/// operations team can still follow up with the interested user.
pub fn property_lookup_failure_alert(user: &User, property_id: i64, reason: &str) -> String {
    format!(
        "⚠️ *Property Lookup Failed*\n\
         👤 *Name:* {}\n\
         📞 *Phone:* {}\n\
         🏘 *Property ID:* {property_id}\n\
         ❗ {reason}\n\
         Please contact the user directly.",
        internal_name(user),
        user.phone,
    )
}

fn construction_internal_alert(user: &User) -> String {
    format!(
        "🏗 *Construction Inquiry*\n\
         👤 *Name:* {}\n\
         📞 *Phone:* {}",
        internal_name(user),
        user.phone,
    )
}

fn construction_messages(user: &User) -> ComposedMessages {
    let user_message = format!(
        "{}\n\
         Thank you for your interest in our construction services.\n\
         \n\
         We build homes, compound walls, and commercial structures with \
         transparent pricing and on-site supervision. Our team will reach \
         out shortly to understand your requirements and share an estimate.\n\
         \n\
         {SIGNATURE}",
        greeting(user),
    );

    ComposedMessages {
        internal: construction_internal_alert(user),
        user: Some(user_message),
    }
}

fn rental_posting_messages(user: &User) -> ComposedMessages {
    let internal = format!(
        "🔑 *New Rental Property Post*\n\
         👤 *Name:* {}\n\
         📞 *Phone:* {}",
        internal_name(user),
        user.phone,
    );

    let user_message = format!(
        "{}\n\
         We're glad you want to post your property for rent on Acrely.\n\
         Please share the following details with us:\n\
         \n\
         - Photos (2 to 3)\n\
         - Google Map location\n\
         - A short description (e.g., 2BHK ground floor)\n\
         - Monthly rent\n\
         - Contact & WhatsApp phone number\n\
         \n\
         Thank you! We look forward to helping you with this.\n\
         \n\
         {SIGNATURE}",
        greeting(user),
    );

    ComposedMessages {
        internal,
        user: Some(user_message),
    }
}

fn custom_search_messages(user: &User) -> ComposedMessages {
    let internal = format!(
        "🔍 *Custom Property Search Request*\n\
         👤 *Name:* {}\n\
         📞 *Phone:* {}",
        internal_name(user),
        user.phone,
    );

    let user_message = format!(
        "{}\n\
         We noticed you had trouble finding properties on our platform that \
         suit your needs.\n\
         \n\
         We'd love to help! Share your requirements with us and our team \
         will search for properties that match what you're looking for.\n\
         \n\
         {SIGNATURE}",
        greeting(user),
    );

    ComposedMessages {
        internal,
        user: Some(user_message),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(name: &str, phone: &str) -> User {
        User {
            id: "u1".into(),
            name: name.into(),
            phone: phone.into(),
            address: String::new(),
            role: None,
            is_blocked: false,
            pref_lang: None,
            notes: None,
            push_notification_tokens: Vec::new(),
            send_push_notifications: false,
            created_at: Utc::now(),
        }
    }

    fn property(id: i64, title: &str, size: &str) -> Property {
        Property {
            id,
            title: title.into(),
            size: size.into(),
            status: "active".into(),
            category_id: None,
            owner_id: None,
            custom_phone_no: None,
            facing: None,
            estimated_price: None,
            negotiable: false,
            featured: false,
            rental: false,
            rent_amount: None,
            created_at: Utc::now(),
        }
    }

    fn sell_event() -> SellRequestEvent {
        SellRequestEvent {
            id: Some(1),
            user_id: "u1".into(),
            notes: None,
            price: "50L".into(),
            address: "MG Road".into(),
            property_type: "Plot".into(),
            created_at: None,
        }
    }

    #[test]
    fn sell_request_internal_contains_structured_fields() {
        let messages = sell_request_messages(&user("Ravi", "919876543210"), &sell_event());

        assert!(messages.internal.contains("Ravi"));
        assert!(messages.internal.contains("Plot"));
        assert!(messages.internal.contains("MG Road"));
        assert!(messages.internal.contains("50L"));
        assert!(messages.internal.contains("919876543210"));
    }

    #[test]
    fn sell_request_user_message_greets_by_name() {
        let messages = sell_request_messages(&user("Ravi", "91..."), &sell_event());
        let reply = messages.user.expect("sell flow always replies to the user");

        assert!(reply.starts_with("Hello Ravi,"));
        assert!(reply.ends_with(SIGNATURE));
    }

    #[test]
    fn empty_name_substitutes_per_audience() {
        let anonymous = user("", "91...");
        let messages = sell_request_messages(&anonymous, &sell_event());

        assert!(messages.internal.contains("Sir/Madam"));
        let reply = messages.user.unwrap();
        assert!(reply.starts_with("Hello Valued Customer,"));
        assert!(!reply.contains("Sir/Madam"));
    }

    #[test]
    fn whitespace_only_name_counts_as_empty() {
        let anonymous = user("   ", "91...");
        let messages = sell_request_messages(&anonymous, &sell_event());
        assert!(messages.internal.contains("Sir/Madam"));
    }

    #[test]
    fn composition_is_idempotent() {
        let asha = user("Asha", "918888777766");
        let event = sell_event();

        let first = sell_request_messages(&asha, &event);
        let second = sell_request_messages(&asha, &event);
        assert_eq!(first, second);

        let p = property(42, "Sunrise Layout", "2400 sqft");
        let a = compose(
            EventKind::PropertyCallPressed,
            &asha,
            Some(&p),
            "https://acrely.in/property",
        );
        let b = compose(
            EventKind::PropertyCallPressed,
            &asha,
            Some(&p),
            "https://acrely.in/property",
        );
        assert_eq!(a, b);
    }

    #[test]
    fn property_interest_alert_has_id_title_size_and_link() {
        let messages = compose(
            EventKind::PropertyWhatsAppPressed,
            &user("Asha", "91..."),
            Some(&property(42, "Sunrise Layout", "2400 sqft")),
            "https://acrely.in/property/",
        )
        .expect("property kind with a record composes");

        assert!(messages.internal.contains("#42"));
        assert!(messages.internal.contains("Sunrise Layout"));
        assert!(messages.internal.contains("2400 sqft"));
        assert!(messages.internal.contains("https://acrely.in/property/42"));
        // Operations staff call the user; no reply goes out for this kind.
        assert!(messages.user.is_none());
    }

    #[test]
    fn property_kind_without_record_composes_nothing() {
        let result = compose(
            EventKind::PropertyCallPressed,
            &user("Asha", "91..."),
            None,
            "https://acrely.in/property",
        );
        assert!(result.is_none());
    }

    #[test]
    fn unknown_kind_composes_nothing() {
        let result = compose(
            EventKind::Unknown,
            &user("Asha", "91..."),
            None,
            "https://acrely.in/property",
        );
        assert!(result.is_none());
    }

    #[test]
    fn construction_kinds_reply_to_the_user() {
        for kind in [
            EventKind::ConstructionCallPressed,
            EventKind::ConstructionWhatsAppPressed,
        ] {
            let messages = compose(kind, &user("Asha", "91..."), None, "").unwrap();
            let reply = messages.user.expect("construction inquiries get a reply");
            assert!(reply.starts_with("Hello Asha,"));
            assert!(reply.contains("construction"));
            assert!(reply.ends_with(SIGNATURE));
        }
    }

    #[test]
    fn brochure_download_alerts_internally_only() {
        let messages = compose(
            EventKind::ConstructionBrochureDownloaded,
            &user("Asha", "91..."),
            None,
            "",
        )
        .unwrap();

        assert!(messages.internal.contains("Construction"));
        assert!(messages.user.is_none());
    }

    #[test]
    fn rental_reply_lists_required_details() {
        let messages = compose(
            EventKind::PostRentalPropertyPressed,
            &user("Asha", "91..."),
            None,
            "",
        )
        .unwrap();

        let reply = messages.user.unwrap();
        assert!(reply.contains("Photos"));
        assert!(reply.contains("Google Map location"));
        assert!(reply.contains("description"));
        assert!(reply.contains("Monthly rent"));
        assert!(reply.contains("phone number"));
    }

    #[test]
    fn custom_search_reply_describes_the_service() {
        let messages = compose(
            EventKind::CustomPropertySearchRequest,
            &user("Asha", "91..."),
            None,
            "",
        )
        .unwrap();

        let reply = messages.user.unwrap();
        assert!(reply.contains("requirements"));
        assert!(reply.ends_with(SIGNATURE));
    }

    #[test]
    fn lookup_failure_alert_names_user_and_property_id() {
        let alert =
            property_lookup_failure_alert(&user("Ravi", "91..."), 99, "property not found");

        assert!(alert.contains("Ravi"));
        assert!(alert.contains("99"));
        assert!(alert.contains("property not found"));
    }
}
