//! Stripe webhook handling
//!
//! Verifies webhook signatures and dispatches checkout completion events
//! to subscription persistence.

use sqlx::PgPool;
use stripe::{CheckoutSession, Event, EventObject, EventType, Webhook};

use crate::config::StripeConfig;
use crate::error::{BillingError, BillingResult};
use crate::subscriptions::SubscriptionService;

/// Event types this service acts on. Everything else is acknowledged and
/// dropped at the HTTP boundary.
const RELEVANT_EVENTS: &[EventType] = &[EventType::CheckoutSessionCompleted];

/// Webhook handler for Stripe events
pub struct WebhookHandler {
    config: StripeConfig,
    pool: PgPool,
}

impl WebhookHandler {
    pub fn new(config: StripeConfig, pool: PgPool) -> Self {
        Self { config, pool }
    }

    /// Whether an event type is in the allow-list of handled events
    pub fn is_relevant(event_type: &EventType) -> bool {
        RELEVANT_EVENTS.contains(event_type)
    }

    /// Verify and parse a Stripe webhook event
    ///
    /// Fails closed: a missing or malformed signature header, a stale
    /// timestamp, or an unparseable envelope all map to
    /// `WebhookSignatureInvalid`.
    pub fn verify_event(&self, payload: &str, signature: &str) -> BillingResult<Event> {
        let webhook_secret = &self.config.webhook_secret;

        let event = Webhook::construct_event(payload, signature, webhook_secret).map_err(|e| {
            tracing::warn!(
                payload_len = payload.len(),
                error = %e,
                "Webhook signature verification failed"
            );
            BillingError::WebhookSignatureInvalid(e.to_string())
        })?;

        tracing::debug!(
            event_type = %event.type_,
            event_id = %event.id,
            "Webhook signature verified"
        );

        Ok(event)
    }

    /// Handle a verified Stripe event
    ///
    /// The caller is expected to filter with [`is_relevant`] first; a
    /// relevant event type without a handler is an error, not a silent drop.
    ///
    /// [`is_relevant`]: WebhookHandler::is_relevant
    pub async fn handle_event(&self, event: Event) -> BillingResult<()> {
        match event.type_ {
            EventType::CheckoutSessionCompleted => self.handle_checkout_completed(event).await,
            other => Err(BillingError::WebhookEventNotSupported(other.to_string())),
        }
    }

    async fn handle_checkout_completed(&self, event: Event) -> BillingResult<()> {
        let event_id = event.id.to_string();
        let session = match event.data.object {
            EventObject::CheckoutSession(session) => session,
            _ => {
                return Err(BillingError::WebhookPayloadInvalid(
                    "expected CheckoutSession".to_string(),
                ))
            }
        };

        let (subscription_id, customer_id) = extract_checkout_ids(&session)?;

        let sub_service = SubscriptionService::new(self.pool.clone());
        sub_service
            .save_subscription(&subscription_id, &customer_id)
            .await?;

        tracing::info!(
            event_id = %event_id,
            subscription_id = %subscription_id,
            customer_id = %customer_id,
            "Checkout completed, subscription saved"
        );

        Ok(())
    }
}

/// Pull the subscription and customer ids out of a completed checkout
/// session. Both can arrive as bare ids or expanded objects.
pub(crate) fn extract_checkout_ids(session: &CheckoutSession) -> BillingResult<(String, String)> {
    let subscription_id = match &session.subscription {
        Some(stripe::Expandable::Id(id)) => id.to_string(),
        Some(stripe::Expandable::Object(s)) => s.id.to_string(),
        None => {
            return Err(BillingError::WebhookPayloadInvalid(
                "no subscription on checkout session".to_string(),
            ))
        }
    };

    let customer_id = match &session.customer {
        Some(stripe::Expandable::Id(id)) => id.to_string(),
        Some(stripe::Expandable::Object(c)) => c.id.to_string(),
        None => {
            return Err(BillingError::WebhookPayloadInvalid(
                "no customer on checkout session".to_string(),
            ))
        }
    };

    Ok((subscription_id, customer_id))
}
