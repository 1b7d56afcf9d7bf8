//! Domain layer for the one-click checkout service.
//!
//! This crate provides the core commerce model:
//! - Order entity with its checkout state machine
//! - Catalog and customer reference entities
//! - Repository traits implemented by the store crate
//! - The `OneClickCheckout` command and its handler, `CheckoutService`

pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod order;
pub mod repository;

pub use catalog::{Channel, ProductVariant};
pub use checkout::{CheckoutService, OneClickCheckout};
pub use customer::{Customer, CustomerId};
pub use error::CheckoutError;
pub use order::{
    Address, ChannelCode, CheckoutState, CheckoutTransition, CurrencyCode, LocaleCode, Money,
    Order, OrderError, OrderItem, QuantityModifier, VariantCode,
};
pub use repository::{
    ChannelRepository, CommerceStore, CustomerRepository, OrderRepository,
    ProductVariantRepository, RepositoryError,
};
