//! Repository traits implemented by the store crate.
//!
//! The checkout workflow is generic over [`CommerceStore`]; implementations
//! must be thread-safe (Send + Sync).

use async_trait::async_trait;
use common::OrderId;
use thiserror::Error;

use crate::catalog::{Channel, ProductVariant};
use crate::customer::{Customer, CustomerId};
use crate::order::{ChannelCode, Order, VariantCode};

/// Error surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend failed (connectivity, constraint violation).
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl RepositoryError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Lookup of product variants by code.
#[async_trait]
pub trait ProductVariantRepository: Send + Sync {
    /// Returns the variant with the given code, or None.
    async fn find_variant(&self, code: &VariantCode) -> Result<Option<ProductVariant>>;
}

/// Lookup of sales channels by code.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Returns the channel with the given code, or None.
    async fn find_channel(&self, code: &ChannelCode) -> Result<Option<Channel>>;
}

/// Lookup of customers by identity.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns the customer with the given ID, or None.
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>>;
}

/// Order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and all of its lines in a single unit of work.
    async fn save_order(&self, order: &Order) -> Result<()>;

    /// Returns a persisted order by ID, or None.
    async fn find_order(&self, id: OrderId) -> Result<Option<Order>>;
}

/// The full set of repositories the checkout workflow needs.
pub trait CommerceStore:
    ProductVariantRepository + ChannelRepository + CustomerRepository + OrderRepository
{
}

// Blanket implementation for anything providing all four repositories
impl<T> CommerceStore for T where
    T: ProductVariantRepository + ChannelRepository + CustomerRepository + OrderRepository
{
}
