//! Row model for the platform `property` table.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A property listing, fetched when a property-interaction event carries a
/// property id.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub size: String,
    pub status: String,
    pub category_id: Option<i64>,
    pub owner_id: Option<String>,
    pub custom_phone_no: Option<String>,
    pub facing: Option<String>,
    pub estimated_price: Option<i32>,
    pub negotiable: bool,
    pub featured: bool,
    pub rental: bool,
    pub rent_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}
