//! Response projection through per-context field allow-lists.
//!
//! Each serialization context is a plain list of field names; the serialized
//! order is filtered down to exactly those top-level fields before it leaves
//! the API.

use domain::{Address, Order, OrderItem};
use serde::Serialize;
use serde_json::Value;

/// Fields exposed by the one-click checkout responses.
///
/// Deliberately omits `customerId`; the caller is the customer.
pub const SHOP_ORDER_ONE_CLICK: &[&str] = &[
    "id",
    "items",
    "checkoutState",
    "total",
    "currencyCode",
    "localeCode",
    "channelCode",
    "shippingAddress",
    "billingAddress",
    "createdAt",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderView {
    id: String,
    customer_id: Option<String>,
    items: Vec<OrderItemView>,
    shipping_address: Option<AddressView>,
    billing_address: Option<AddressView>,
    channel_code: Option<String>,
    currency_code: Option<String>,
    locale_code: Option<String>,
    checkout_state: String,
    total: i64,
    created_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderItemView {
    variant_code: String,
    product_name: String,
    quantity: u32,
    unit_price: i64,
    total: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressView {
    street: String,
    city: String,
    postcode: String,
    country_code: String,
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            variant_code: item.variant_code.to_string(),
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.cents(),
            total: item.total.cents(),
        }
    }
}

impl From<&Address> for AddressView {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            postcode: address.postcode.clone(),
            country_code: address.country_code.clone(),
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().map(|id| id.to_string()),
            items: order.items().iter().map(OrderItemView::from).collect(),
            shipping_address: order.shipping_address().map(AddressView::from),
            billing_address: order.billing_address().map(AddressView::from),
            channel_code: order.channel_code().map(|c| c.to_string()),
            currency_code: order.currency_code().map(|c| c.to_string()),
            locale_code: order.locale_code().map(|l| l.to_string()),
            checkout_state: order.checkout_state().as_str().to_string(),
            total: order.total().cents(),
            created_at: order.created_at().to_rfc3339(),
        }
    }
}

/// Serializes an order and filters it down to the given allow-list.
pub fn order_json(order: &Order, fields: &[&str]) -> Value {
    let value = serde_json::to_value(OrderView::from(order))
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
    project(value, fields)
}

/// Retains only the allow-listed top-level fields of a JSON object.
pub fn project(value: Value, fields: &[&str]) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| fields.contains(&key.as_str()))
                .collect(),
        ),
        other => other,
    }
}
