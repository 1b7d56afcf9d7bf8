//! Checkout workflow errors.

use thiserror::Error;

use crate::customer::CustomerId;
use crate::order::{ChannelCode, OrderError, VariantCode};
use crate::repository::RepositoryError;

/// Errors that can abort the one-click checkout workflow.
///
/// Every failure aborts the handler immediately; no partial order is
/// persisted and nothing is retried.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The product variant code did not resolve.
    #[error("product variant not found: {code}")]
    VariantNotFound { code: VariantCode },

    /// The channel code did not resolve.
    #[error("channel not found: {code}")]
    ChannelNotFound { code: ChannelCode },

    /// The request context supplied no channel code at all.
    #[error("no channel code was resolved from the request context")]
    MissingChannelContext,

    /// The authenticated user has no linked customer.
    #[error("customer not found: {id}")]
    CustomerNotFound { id: CustomerId },

    /// The customer has no default address to ship and bill to.
    #[error("customer {id} has no default address")]
    MissingDefaultAddress { id: CustomerId },

    /// The order entity or its state machine rejected an operation.
    #[error("checkout rejected: {0}")]
    Rejected(#[from] OrderError),

    /// The final save failed.
    #[error("persistence failure: {0}")]
    Persistence(#[from] RepositoryError),
}
