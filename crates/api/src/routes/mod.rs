//! Route registration, one `router()` per module.

pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

/// Webhook endpoints, mounted under `/webhooks`.
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/sell-request", post(webhooks::handle_sell_request))
        .route("/user-logs", post(webhooks::handle_user_logs))
}
