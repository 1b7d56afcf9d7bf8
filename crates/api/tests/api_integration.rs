//! Integration tests for the API server.

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

use api::config::Config;
use api::routes::AppState;
use domain::{Customer, CustomerId};
use store::InMemoryStore;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

async fn setup() -> (axum::Router, CustomerId) {
    setup_with_config(Config::default()).await.0
}

async fn setup_with_config(
    config: Config,
) -> ((axum::Router, CustomerId), Arc<AppState<InMemoryStore>>) {
    let (state, customer_id) = api::create_default_state(config).await;
    let app = api::create_app(state.clone(), get_metrics_handle());
    ((app, customer_id), state)
}

fn checkout_request(bearer: Option<&str>, channel: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/order/one-click-checkout")
        .header("content-type", "application/json");
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    if let Some(code) = channel {
        builder = builder.header("x-channel-code", code);
    }
    builder
        .body(Body::from(
            serde_json::to_string(&serde_json::json!({
                "productVariantCode": "MUG-BLUE",
                "localeCode": "en_US"
            }))
            .unwrap(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_check() {
    let (app, _) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn one_click_checkout_happy_path() {
    let (app, customer_id) = setup().await;

    let response = app
        .oneshot(checkout_request(
            Some(&customer_id.to_string()),
            Some("WEB"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let order = body_json(response).await;

    assert_eq!(order["checkoutState"], "completed");
    assert_eq!(order["total"], 1500);
    assert_eq!(order["currencyCode"], "USD");
    assert_eq!(order["localeCode"], "en_US");
    assert_eq!(order["channelCode"], "WEB");

    let items = order["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["variantCode"], "MUG-BLUE");
    assert_eq!(items[0]["quantity"], 1);
    assert_eq!(items[0]["unitPrice"], 1500);

    assert_eq!(order["shippingAddress"], order["billingAddress"]);
    assert_eq!(order["shippingAddress"]["street"], "123 Main St");

    // Restricted by the response field allow-list
    assert!(order.get("customerId").is_none());
    assert!(order["id"].as_str().is_some());
}

#[tokio::test]
async fn checkout_falls_back_to_default_channel() {
    let (app, customer_id) = setup().await;

    let response = app
        .oneshot(checkout_request(Some(&customer_id.to_string()), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let order = body_json(response).await;
    assert_eq!(order["channelCode"], "WEB");
}

#[tokio::test]
async fn checkout_without_channel_or_default_is_rejected() {
    let config = Config {
        default_channel_code: None,
        ..Config::default()
    };
    let ((app, customer_id), _) = setup_with_config(config).await;

    let response = app
        .oneshot(checkout_request(Some(&customer_id.to_string()), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkout_without_bearer_is_unauthorized() {
    let (app, _) = setup().await;

    let response = app
        .oneshot(checkout_request(None, Some("WEB")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_with_malformed_bearer_is_unauthorized() {
    let (app, _) = setup().await;

    let response = app
        .oneshot(checkout_request(Some("not-a-uuid"), Some("WEB")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_variant_returns_not_found() {
    let (app, customer_id) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/order/one-click-checkout")
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {customer_id}"))
                .header("x-channel-code", "WEB")
                .body(Body::from(
                    serde_json::to_string(&serde_json::json!({
                        "productVariantCode": "MUG-GREEN"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_channel_returns_not_found() {
    let (app, customer_id) = setup().await;

    let response = app
        .oneshot(checkout_request(Some(&customer_id.to_string()), Some("POS")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_customer_returns_not_found() {
    let (app, _) = setup().await;
    let unknown = uuid::Uuid::new_v4().to_string();

    let response = app
        .oneshot(checkout_request(Some(&unknown), Some("WEB")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customer_without_default_address_is_unprocessable() {
    let ((app, _), state) = setup_with_config(Config::default()).await;

    let customer_id = CustomerId::new();
    state
        .checkout_service
        .store()
        .insert_customer(Customer::new(customer_id, "bob@example.com", None))
        .await;

    let response = app
        .oneshot(checkout_request(
            Some(&customer_id.to_string()),
            Some("WEB"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn checkout_then_get_order() {
    let (app, customer_id) = setup().await;

    let create_response = app
        .clone()
        .oneshot(checkout_request(
            Some(&customer_id.to_string()),
            Some("WEB"),
        ))
        .await
        .unwrap();
    assert_eq!(create_response.status(), StatusCode::CREATED);
    let created = body_json(create_response).await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let get_response = app
        .oneshot(
            Request::builder()
                .uri(format!("/orders/{order_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(get_response.status(), StatusCode::OK);
    let fetched = body_json(get_response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn repeated_checkouts_create_distinct_orders() {
    let (app, customer_id) = setup().await;

    let first = body_json(
        app.clone()
            .oneshot(checkout_request(
                Some(&customer_id.to_string()),
                Some("WEB"),
            ))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(checkout_request(
            Some(&customer_id.to_string()),
            Some("WEB"),
        ))
        .await
        .unwrap(),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn get_nonexistent_order_returns_not_found() {
    let (app, _) = setup().await;
    let fake_id = uuid::Uuid::new_v4();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/orders/{fake_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_order_with_invalid_id_is_bad_request() {
    let (app, _) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let (app, _) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
