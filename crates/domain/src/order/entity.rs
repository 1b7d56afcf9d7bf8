//! Order entity.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;

use super::{
    Address, ChannelCode, CheckoutState, CheckoutTransition, CurrencyCode, LocaleCode, Money,
    OrderError, OrderItem,
};

/// An order being assembled and checked out.
///
/// Created fresh per one-click checkout request, mutated through the
/// workflow, and persisted exactly once at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: Option<CustomerId>,
    items: Vec<OrderItem>,
    shipping_address: Option<Address>,
    billing_address: Option<Address>,
    channel_code: Option<ChannelCode>,
    currency_code: Option<CurrencyCode>,
    locale_code: Option<LocaleCode>,
    checkout_state: CheckoutState,
    total: Money,
    created_at: DateTime<Utc>,
}

// Query methods
impl Order {
    /// Creates a new empty cart order.
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            customer_id: None,
            items: Vec::new(),
            shipping_address: None,
            billing_address: None,
            channel_code: None,
            currency_code: None,
            locale_code: None,
            checkout_state: CheckoutState::Cart,
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn shipping_address(&self) -> Option<&Address> {
        self.shipping_address.as_ref()
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    pub fn channel_code(&self) -> Option<&ChannelCode> {
        self.channel_code.as_ref()
    }

    pub fn currency_code(&self) -> Option<&CurrencyCode> {
        self.currency_code.as_ref()
    }

    pub fn locale_code(&self) -> Option<&LocaleCode> {
        self.locale_code.as_ref()
    }

    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout_state
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

// Mutators used by the checkout workflow
impl Order {
    /// Appends an item and recalculates the order total.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if !self.checkout_state.can_modify_items() {
            return Err(OrderError::ItemsLocked {
                state: self.checkout_state,
            });
        }
        if item.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                quantity: item.quantity,
            });
        }

        self.items.push(item);
        self.recalculate_total();
        Ok(())
    }

    pub fn set_customer(&mut self, customer_id: CustomerId) {
        self.customer_id = Some(customer_id);
    }

    pub fn set_shipping_address(&mut self, address: Address) {
        self.shipping_address = Some(address);
    }

    pub fn set_billing_address(&mut self, address: Address) {
        self.billing_address = Some(address);
    }

    pub fn set_channel(&mut self, code: ChannelCode) {
        self.channel_code = Some(code);
    }

    pub fn set_currency_code(&mut self, code: CurrencyCode) {
        self.currency_code = Some(code);
    }

    pub fn set_locale_code(&mut self, code: Option<LocaleCode>) {
        self.locale_code = code;
    }

    /// Recomputes the order total from its line totals.
    pub fn recalculate_total(&mut self) {
        self.total = self
            .items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.total);
    }
}

// Checkout transitions
impl Order {
    /// Applies the `address` transition.
    ///
    /// Guards: the order must be a cart with at least one item, a customer,
    /// and both addresses set.
    pub fn address(&mut self) -> Result<(), OrderError> {
        if !self.checkout_state.can_address() {
            return Err(self.rejected(CheckoutTransition::Address));
        }
        if self.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        if self.customer_id.is_none() {
            return Err(OrderError::NoCustomer);
        }
        if self.shipping_address.is_none() || self.billing_address.is_none() {
            return Err(OrderError::MissingAddress);
        }

        self.checkout_state = CheckoutState::Addressed;
        Ok(())
    }

    /// Applies the `select_shipping` transition.
    pub fn select_shipping(&mut self) -> Result<(), OrderError> {
        if !self.checkout_state.can_select_shipping() {
            return Err(self.rejected(CheckoutTransition::SelectShipping));
        }

        self.checkout_state = CheckoutState::ShippingSelected;
        Ok(())
    }

    /// Applies the `select_payment` transition.
    pub fn select_payment(&mut self) -> Result<(), OrderError> {
        if !self.checkout_state.can_select_payment() {
            return Err(self.rejected(CheckoutTransition::SelectPayment));
        }

        self.checkout_state = CheckoutState::PaymentSelected;
        Ok(())
    }

    /// Applies the `complete` transition.
    pub fn complete(&mut self) -> Result<(), OrderError> {
        if !self.checkout_state.can_complete() {
            return Err(self.rejected(CheckoutTransition::Complete));
        }

        self.checkout_state = CheckoutState::Completed;
        Ok(())
    }

    fn rejected(&self, transition: CheckoutTransition) -> OrderError {
        OrderError::TransitionRejected {
            state: self.checkout_state,
            transition,
        }
    }
}
