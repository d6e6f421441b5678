// Large JSON event fixtures in tests expand past the default macro depth
#![cfg_attr(test, recursion_limit = "256")]
// Test code patterns:
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Newsly API Library
//!
//! HTTP boundary for the Newsly subscription service: configuration,
//! application state, and the webhook/health routes.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
