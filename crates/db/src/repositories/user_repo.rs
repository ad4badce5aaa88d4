//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, address, role, is_blocked, pref_lang, \
                       notes, push_notification_tokens, send_push_notifications, created_at";

/// Read-only lookups for users. This service never writes user rows.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by upstream auth id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
