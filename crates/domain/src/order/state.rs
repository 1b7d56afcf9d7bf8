//! Checkout state machine.

use serde::{Deserialize, Serialize};

/// Checkout progress of an order.
///
/// State transitions:
/// ```text
/// Cart ──address──► Addressed ──select_shipping──► ShippingSelected
///     ──select_payment──► PaymentSelected ──complete──► Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Order is being assembled; items can still be modified.
    #[default]
    Cart,

    /// Shipping and billing addresses have been set.
    Addressed,

    /// Shipping has been selected.
    ShippingSelected,

    /// Payment has been selected.
    PaymentSelected,

    /// Checkout finished (terminal state).
    Completed,
}

impl CheckoutState {
    /// Returns true if items can be modified in this state.
    pub fn can_modify_items(&self) -> bool {
        matches!(self, CheckoutState::Cart)
    }

    /// Returns true if the address transition is allowed in this state.
    pub fn can_address(&self) -> bool {
        matches!(self, CheckoutState::Cart)
    }

    /// Returns true if shipping selection is allowed in this state.
    pub fn can_select_shipping(&self) -> bool {
        matches!(self, CheckoutState::Addressed)
    }

    /// Returns true if payment selection is allowed in this state.
    pub fn can_select_payment(&self) -> bool {
        matches!(self, CheckoutState::ShippingSelected)
    }

    /// Returns true if the order can be completed in this state.
    pub fn can_complete(&self) -> bool {
        matches!(self, CheckoutState::PaymentSelected)
    }

    /// Returns true if checkout has finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutState::Completed)
    }

    /// Returns the state name as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Cart => "cart",
            CheckoutState::Addressed => "addressed",
            CheckoutState::ShippingSelected => "shipping_selected",
            CheckoutState::PaymentSelected => "payment_selected",
            CheckoutState::Completed => "completed",
        }
    }
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four transitions applied, in order, by the one-click checkout
/// workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutTransition {
    Address,
    SelectShipping,
    SelectPayment,
    Complete,
}

impl CheckoutTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutTransition::Address => "address",
            CheckoutTransition::SelectShipping => "select_shipping",
            CheckoutTransition::SelectPayment => "select_payment",
            CheckoutTransition::Complete => "complete",
        }
    }
}

impl std::fmt::Display for CheckoutTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
