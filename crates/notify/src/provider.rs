//! Enrichment seam: fetching the records a webhook event references by id.
//!
//! The dispatch coordinator only ever sees [`EnrichmentProvider`]; the
//! Postgres implementation lives here, and tests substitute fakes.

use async_trait::async_trait;

use acrely_db::models::{Property, User};
use acrely_db::repositories::{PropertyRepo, UserRepo};
use acrely_db::DbPool;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// A record lookup failed.
///
/// `NotFound` and `Backend` are deliberately distinct: a missing row is a
/// data problem, a backend failure is an infrastructure problem, and the
/// dispatch flows log them differently. Both abort a flow whose subject
/// record is mandatory.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    /// No row exists for the given id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The lookup itself failed (connection, timeout, bad schema).
    #[error("failed to fetch {entity}: {reason}")]
    Backend { entity: &'static str, reason: String },
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Fetches the records webhook events reference only by id.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Fetch a user by upstream auth id.
    async fn fetch_user(&self, id: &str) -> Result<User, EnrichmentError>;

    /// Fetch a property listing by id.
    async fn fetch_property(&self, id: i64) -> Result<Property, EnrichmentError>;
}

// ---------------------------------------------------------------------------
// Postgres implementation
// ---------------------------------------------------------------------------

/// [`EnrichmentProvider`] backed by the platform Postgres database.
pub struct PgEnrichment {
    pool: DbPool,
}

impl PgEnrichment {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrichmentProvider for PgEnrichment {
    async fn fetch_user(&self, id: &str) -> Result<User, EnrichmentError> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| EnrichmentError::Backend {
                entity: "user",
                reason: e.to_string(),
            })?
            .ok_or_else(|| EnrichmentError::NotFound {
                entity: "user",
                id: id.to_string(),
            })
    }

    async fn fetch_property(&self, id: i64) -> Result<Property, EnrichmentError> {
        PropertyRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| EnrichmentError::Backend {
                entity: "property",
                reason: e.to_string(),
            })?
            .ok_or_else(|| EnrichmentError::NotFound {
                entity: "property",
                id: id.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_entity_and_id() {
        let err = EnrichmentError::NotFound {
            entity: "user",
            id: "u1".into(),
        };
        assert_eq!(err.to_string(), "user with id u1 not found");
    }

    #[test]
    fn backend_display_names_the_entity() {
        let err = EnrichmentError::Backend {
            entity: "property",
            reason: "pool timed out".into(),
        };
        assert_eq!(err.to_string(), "failed to fetch property: pool timed out");
    }
}
