//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Webhook delivery rejected before dispatch. Always a 400 with a
    /// plain-text body so Stripe records the failure and retries.
    #[error("Webhook error: {0}")]
    WebhookVerification(String),

    #[error("database unavailable: {0}")]
    Database(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::WebhookVerification(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Database(_) => {
                tracing::error!(error = %self, "Service dependency unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": "database unavailable" })),
                )
                    .into_response()
            }
        }
    }
}
