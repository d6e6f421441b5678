// Large JSON event fixtures in tests expand past the default macro depth
#![cfg_attr(test, recursion_limit = "256")]
// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Newsly Billing Module
//!
//! Handles the Stripe side of the subscription flow.
//!
//! ## Features
//!
//! - **Webhooks**: Verify Stripe webhook signatures and dispatch events
//! - **Subscription Persistence**: Store subscription/customer ids on checkout completion

pub mod config;
pub mod error;
pub mod subscriptions;
pub mod webhooks;


// Config
pub use config::StripeConfig;

// Error
pub use error::{BillingError, BillingResult};

// Subscriptions
pub use subscriptions::SubscriptionService;

// Webhooks
pub use webhooks::WebhookHandler;

use sqlx::PgPool;

/// Main billing service that combines all billing functionality
pub struct BillingService {
    pub subscriptions: SubscriptionService,
    pub webhooks: WebhookHandler,
}

impl BillingService {
    /// Create a new billing service from environment variables
    pub fn from_env(pool: PgPool) -> BillingResult<Self> {
        Ok(Self::new(StripeConfig::from_env()?, pool))
    }

    /// Create a new billing service with explicit config
    pub fn new(config: StripeConfig, pool: PgPool) -> Self {
        Self {
            subscriptions: SubscriptionService::new(pool.clone()),
            webhooks: WebhookHandler::new(config, pool),
        }
    }
}
