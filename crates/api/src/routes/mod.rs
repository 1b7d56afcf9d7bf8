//! HTTP route handlers.

pub mod checkout;
pub mod health;
pub mod metrics;
pub mod orders;

use domain::{CheckoutService, CommerceStore};

use crate::config::Config;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CommerceStore> {
    pub checkout_service: CheckoutService<S>,
    pub config: Config,
}
