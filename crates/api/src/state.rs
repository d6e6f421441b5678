//! Application state

use std::sync::Arc;

use newsly_billing::{BillingResult, BillingService};
use sqlx::PgPool;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub billing: Arc<BillingService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> BillingResult<Self> {
        let billing = Arc::new(BillingService::from_env(pool.clone())?);

        Ok(Self {
            pool,
            config,
            billing,
        })
    }
}
