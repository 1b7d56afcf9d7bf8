//! Order entity and related types.

mod entity;
mod quantity;
mod state;
mod value_objects;

pub use entity::Order;
pub use quantity::QuantityModifier;
pub use state::{CheckoutState, CheckoutTransition};
pub use value_objects::{
    Address, ChannelCode, CurrencyCode, LocaleCode, Money, OrderItem, VariantCode,
};

use thiserror::Error;

/// Errors raised by the order entity and its checkout state machine.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A checkout transition was applied in a state that does not permit it.
    #[error("cannot apply {transition} from {state} state")]
    TransitionRejected {
        state: CheckoutState,
        transition: CheckoutTransition,
    },

    /// The address transition requires at least one item.
    #[error("order has no items")]
    NoItems,

    /// The address transition requires a customer.
    #[error("order has no customer")]
    NoCustomer,

    /// The address transition requires both shipping and billing address.
    #[error("order is missing a shipping or billing address")]
    MissingAddress,

    /// Items can only be modified while the order is a cart.
    #[error("items can no longer be modified in {state} state")]
    ItemsLocked { state: CheckoutState },

    /// Invalid item quantity.
    #[error("invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },
}
