//! Repository for the `property` table.

use sqlx::PgPool;

use crate::models::Property;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, size, status, category_id, owner_id, custom_phone_no, \
                       facing, estimated_price, negotiable, featured, rental, rent_amount, \
                       created_at";

/// Read-only lookups for property listings.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Find a property by listing id.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
