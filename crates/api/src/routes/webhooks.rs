//! Stripe webhook endpoint
//!
//! Receives raw webhook deliveries, verifies the signature, and dispatches
//! the event into the billing crate. The body must stay unparsed until the
//! signature check because verification runs over the exact bytes Stripe
//! signed.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use newsly_billing::WebhookHandler;
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let payload = std::str::from_utf8(&body)
        .map_err(|_| ApiError::WebhookVerification("body is not valid UTF-8".to_string()))?;

    let signature = headers
        .get("stripe-signature")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            ApiError::WebhookVerification("missing Stripe-Signature header".to_string())
        })?;

    let event = state
        .billing
        .webhooks
        .verify_event(payload, signature)
        .map_err(|e| ApiError::WebhookVerification(e.to_string()))?;

    let event_type = event.type_;
    if !WebhookHandler::is_relevant(&event_type) {
        tracing::info!(
            event_type = %event_type,
            event_id = %event.id,
            "Ignoring Stripe event with no handler configured"
        );
        return Ok(Json(json!({ "received": true })).into_response());
    }

    if let Err(e) = state.billing.webhooks.handle_event(event).await {
        tracing::error!(
            event_type = %event_type,
            error = %e,
            "Webhook handler failed"
        );
        // Handler failures are still acknowledged with 200
        return Ok(Json(json!({ "error": "Webhook handler failed." })).into_response());
    }

    Ok(Json(json!({ "received": true })).into_response())
}
