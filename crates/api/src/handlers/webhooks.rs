//! Webhook handlers for the two upstream event feeds.
//!
//! Both endpoints accept the producer's envelope (`type`/`table`/`schema`
//! metadata around a `record`), classify it with the pure classifier, and
//! hand the event to the dispatch coordinator. Payload problems come back
//! as 400s; a failed mandatory enrichment as a 500; a failed send never
//! changes the status -- the webhook was accepted, and the send outcome is
//! recorded inside the returned dispatch result.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use acrely_core::payload::{classify_sell_request, classify_user_event};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /webhooks/sell-request
///
/// A user submitted a "sell my property" form. Alerts the operations group
/// and acknowledges the user.
pub async fn handle_sell_request(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let event = classify_sell_request(&payload)?;

    tracing::info!(user_id = %event.user_id, "Sell request webhook received");

    let result = state.dispatcher.dispatch_sell_request(&event).await?;
    Ok(Json(DataResponse { data: result }))
}

/// POST /webhooks/user-logs
///
/// A user-action log row was inserted upstream. Routes on the event kind;
/// unrecognized kinds are acknowledged without notifications so the
/// producer does not retry them forever.
pub async fn handle_user_logs(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let event = classify_user_event(&payload)?;

    tracing::info!(
        user_id = %event.user_id,
        category = event.event_type.category().as_str(),
        "User log webhook received"
    );

    let result = state.dispatcher.dispatch_user_event(&event).await?;
    Ok(Json(DataResponse { data: result }))
}
