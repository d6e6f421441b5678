//! Billing error types

use thiserror::Error;

pub type BillingResult<T> = Result<T, BillingError>;

#[derive(Debug, Error)]
pub enum BillingError {
    /// Signature header missing pieces, stale, or not matching the payload
    #[error("webhook signature verification failed: {0}")]
    WebhookSignatureInvalid(String),

    /// Event type passed the allow-list but has no handler configured
    #[error("unhandled webhook event: {0}")]
    WebhookEventNotSupported(String),

    /// Event payload did not carry the object the handler expected
    #[error("malformed webhook payload: {0}")]
    WebhookPayloadInvalid(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
