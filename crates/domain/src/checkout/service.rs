//! One-click checkout handler.

use common::OrderId;

use crate::customer::CustomerId;
use crate::error::CheckoutError;
use crate::order::{Order, OrderItem, QuantityModifier};
use crate::repository::CommerceStore;

use super::OneClickCheckout;

/// Handles the one-click checkout workflow against a commerce store.
///
/// The workflow resolves the variant, builds a one-item order for the
/// authenticated customer's default addresses and the request channel,
/// drives the order through the four checkout transitions, and persists it
/// once. Any failure aborts the whole operation; nothing partial is saved.
pub struct CheckoutService<S: CommerceStore> {
    store: S,
    quantity_modifier: QuantityModifier,
}

impl<S: CommerceStore> CheckoutService<S> {
    /// Creates a new checkout service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            quantity_modifier: QuantityModifier::new(),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Executes the one-click checkout for the authenticated customer.
    #[tracing::instrument(skip(self), fields(variant = %command.product_variant_code()))]
    pub async fn one_click_checkout(
        &self,
        customer_id: CustomerId,
        command: OneClickCheckout,
    ) -> Result<Order, CheckoutError> {
        metrics::counter!("checkout_attempts_total").increment(1);

        let variant = self
            .store
            .find_variant(command.product_variant_code())
            .await?
            .ok_or_else(|| CheckoutError::VariantNotFound {
                code: command.product_variant_code().clone(),
            })?;

        let mut order = Order::new(OrderId::new());
        let mut item = OrderItem::new(
            variant.code.clone(),
            variant.product_name.clone(),
            1,
            variant.unit_price,
        );
        // One-click checkout always buys exactly one unit.
        self.quantity_modifier.modify(&mut item, 1)?;
        order.add_item(item)?;

        let customer = self
            .store
            .find_customer(customer_id)
            .await?
            .ok_or(CheckoutError::CustomerNotFound { id: customer_id })?;

        order.set_customer(customer.id);

        // The default address serves as both shipping and billing address;
        // a customer without one cannot check out in one click.
        let address = customer
            .default_address
            .ok_or(CheckoutError::MissingDefaultAddress { id: customer.id })?;
        order.set_shipping_address(address.clone());
        order.set_billing_address(address);

        let channel_code = command
            .channel_code()
            .ok_or(CheckoutError::MissingChannelContext)?;
        let channel = self
            .store
            .find_channel(channel_code)
            .await?
            .ok_or_else(|| CheckoutError::ChannelNotFound {
                code: channel_code.clone(),
            })?;

        order.set_channel(channel.code.clone());
        order.set_currency_code(channel.base_currency.clone());
        order.set_locale_code(command.locale_code().cloned());

        order.address()?;
        order.select_shipping()?;
        order.select_payment()?;
        order.complete()?;

        self.store.save_order(&order).await?;

        metrics::counter!("checkout_completed_total").increment(1);
        tracing::info!(order_id = %order.id(), channel = %channel.code, "one-click checkout completed");

        Ok(order)
    }

    /// Loads a persisted order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Option<Order>, CheckoutError> {
        Ok(self.store.find_order(order_id).await?)
    }
}
