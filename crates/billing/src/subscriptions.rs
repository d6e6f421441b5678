//! Subscription persistence

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::BillingResult;

/// Stores subscription records coming out of Stripe checkout completions
pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert the subscription/customer id pair for a completed checkout.
    ///
    /// Keyed on stripe_subscription_id: Stripe can re-deliver the same
    /// checkout completion, and the second delivery must overwrite the
    /// record, not duplicate it.
    pub async fn save_subscription(
        &self,
        subscription_id: &str,
        customer_id: &str,
    ) -> BillingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, stripe_subscription_id, stripe_customer_id, created_at, updated_at
            ) VALUES (
                $1, $2, $3, NOW(), NOW()
            )
            ON CONFLICT (stripe_subscription_id) DO UPDATE SET
                stripe_customer_id = EXCLUDED.stripe_customer_id,
                updated_at = NOW()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(subscription_id)
        .bind(customer_id)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            subscription_id = %subscription_id,
            customer_id = %customer_id,
            "Subscription record saved"
        );

        Ok(())
    }
}
