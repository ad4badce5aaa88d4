//! Row model for the platform `users` table.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A platform user, keyed by the upstream auth id (a string, not a serial).
///
/// `name` may be empty for users who never completed their profile; message
/// templates substitute a generic salutation in that case.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub role: Option<String>,
    pub is_blocked: bool,
    pub pref_lang: Option<String>,
    pub notes: Option<String>,
    pub push_notification_tokens: Vec<String>,
    pub send_push_notifications: bool,
    pub created_at: DateTime<Utc>,
}
