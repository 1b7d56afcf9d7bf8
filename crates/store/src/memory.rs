//! In-memory commerce store for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::OrderId;
use domain::{
    Channel, ChannelCode, ChannelRepository, Customer, CustomerId, CustomerRepository, Order,
    OrderRepository, ProductVariant, ProductVariantRepository, VariantCode,
};

type Result<T> = domain::repository::Result<T>;

/// In-memory store backed by `RwLock`-protected maps.
///
/// Catalog data (variants, channels, customers) is seeded up front with the
/// `insert_*` helpers; orders accumulate as checkouts complete.
#[derive(Default)]
pub struct InMemoryStore {
    variants: RwLock<HashMap<VariantCode, ProductVariant>>,
    channels: RwLock<HashMap<ChannelCode, Channel>>,
    customers: RwLock<HashMap<CustomerId, Customer>>,
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a product variant.
    pub async fn insert_variant(&self, variant: ProductVariant) {
        self.variants
            .write()
            .await
            .insert(variant.code.clone(), variant);
    }

    /// Seeds a sales channel.
    pub async fn insert_channel(&self, channel: Channel) {
        self.channels
            .write()
            .await
            .insert(channel.code.clone(), channel);
    }

    /// Seeds a customer.
    pub async fn insert_customer(&self, customer: Customer) {
        self.customers.write().await.insert(customer.id, customer);
    }

    /// Returns the number of persisted orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl ProductVariantRepository for InMemoryStore {
    async fn find_variant(&self, code: &VariantCode) -> Result<Option<ProductVariant>> {
        Ok(self.variants.read().await.get(code).cloned())
    }
}

#[async_trait]
impl ChannelRepository for InMemoryStore {
    async fn find_channel(&self, code: &ChannelCode) -> Result<Option<Channel>> {
        Ok(self.channels.read().await.get(code).cloned())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.customers.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn save_order(&self, order: &Order) -> Result<()> {
        self.orders.write().await.insert(order.id(), order.clone());
        Ok(())
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }
}
