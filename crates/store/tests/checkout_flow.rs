//! End-to-end checkout workflow tests against the in-memory store.

use domain::{
    Address, Channel, ChannelCode, CheckoutError, CheckoutService, CheckoutState, Customer,
    CustomerId, LocaleCode, Money, OneClickCheckout, ProductVariant,
};
use store::InMemoryStore;

async fn seeded_store() -> (InMemoryStore, CustomerId) {
    let store = InMemoryStore::new();
    store
        .insert_variant(ProductVariant::new(
            "MUG-BLUE",
            "Blue Mug",
            Money::from_cents(1500),
        ))
        .await;
    store
        .insert_channel(Channel::new("WEB", "Web Store", "USD"))
        .await;

    let customer_id = CustomerId::new();
    store
        .insert_customer(Customer::new(
            customer_id,
            "alice@example.com",
            Some(Address::new("123 Main St", "Springfield", "12345", "US")),
        ))
        .await;

    (store, customer_id)
}

fn command() -> OneClickCheckout {
    let mut cmd = OneClickCheckout::new("MUG-BLUE", Some(LocaleCode::new("en_US")));
    cmd.set_channel_code(Some(ChannelCode::new("WEB")));
    cmd
}

#[tokio::test]
async fn one_click_checkout_completes_and_persists_the_order() {
    let (store, customer_id) = seeded_store().await;
    let service = CheckoutService::new(store);

    let order = service
        .one_click_checkout(customer_id, command())
        .await
        .unwrap();

    assert_eq!(order.checkout_state(), CheckoutState::Completed);
    assert_eq!(order.customer_id(), Some(customer_id));

    assert_eq!(order.items().len(), 1);
    let item = &order.items()[0];
    assert_eq!(item.variant_code.as_str(), "MUG-BLUE");
    assert_eq!(item.product_name, "Blue Mug");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.unit_price.cents(), 1500);
    assert_eq!(order.total().cents(), 1500);

    let address = order.shipping_address().unwrap();
    assert_eq!(address.street, "123 Main St");
    assert_eq!(order.billing_address(), order.shipping_address());

    assert_eq!(order.channel_code().unwrap().as_str(), "WEB");
    assert_eq!(order.currency_code().unwrap().as_str(), "USD");
    assert_eq!(order.locale_code().unwrap().as_str(), "en_US");

    let persisted = service.get_order(order.id()).await.unwrap().unwrap();
    assert_eq!(persisted, order);
}

#[tokio::test]
async fn checkout_without_locale_leaves_locale_unset() {
    let (store, customer_id) = seeded_store().await;
    let service = CheckoutService::new(store);

    let mut cmd = OneClickCheckout::new("MUG-BLUE", None);
    cmd.set_channel_code(Some(ChannelCode::new("WEB")));
    let order = service.one_click_checkout(customer_id, cmd).await.unwrap();

    assert!(order.locale_code().is_none());
    assert_eq!(order.checkout_state(), CheckoutState::Completed);
}

#[tokio::test]
async fn unknown_variant_is_rejected_and_nothing_is_saved() {
    let (store, customer_id) = seeded_store().await;
    let service = CheckoutService::new(store);

    let mut cmd = OneClickCheckout::new("MUG-GREEN", None);
    cmd.set_channel_code(Some(ChannelCode::new("WEB")));
    let err = service
        .one_click_checkout(customer_id, cmd)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::VariantNotFound { .. }));
    assert_eq!(service.store().order_count().await, 0);
}

#[tokio::test]
async fn unknown_channel_is_rejected() {
    let (store, customer_id) = seeded_store().await;
    let service = CheckoutService::new(store);

    let mut cmd = OneClickCheckout::new("MUG-BLUE", None);
    cmd.set_channel_code(Some(ChannelCode::new("POS")));
    let err = service
        .one_click_checkout(customer_id, cmd)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::ChannelNotFound { .. }));
    assert_eq!(service.store().order_count().await, 0);
}

#[tokio::test]
async fn missing_channel_context_is_rejected() {
    let (store, customer_id) = seeded_store().await;
    let service = CheckoutService::new(store);

    let cmd = OneClickCheckout::new("MUG-BLUE", None);
    let err = service
        .one_click_checkout(customer_id, cmd)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::MissingChannelContext));
}

#[tokio::test]
async fn unknown_customer_is_rejected() {
    let (store, _) = seeded_store().await;
    let service = CheckoutService::new(store);

    let err = service
        .one_click_checkout(CustomerId::new(), command())
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::CustomerNotFound { .. }));
    assert_eq!(service.store().order_count().await, 0);
}

#[tokio::test]
async fn customer_without_default_address_is_rejected() {
    let (store, _) = seeded_store().await;
    let customer_id = CustomerId::new();
    store
        .insert_customer(Customer::new(customer_id, "bob@example.com", None))
        .await;
    let service = CheckoutService::new(store);

    let err = service
        .one_click_checkout(customer_id, command())
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::MissingDefaultAddress { .. }));
    assert_eq!(service.store().order_count().await, 0);
}

#[tokio::test]
async fn repeated_checkouts_create_distinct_orders() {
    let (store, customer_id) = seeded_store().await;
    let service = CheckoutService::new(store);

    let first = service
        .one_click_checkout(customer_id, command())
        .await
        .unwrap();
    let second = service
        .one_click_checkout(customer_id, command())
        .await
        .unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(service.store().order_count().await, 2);
}
