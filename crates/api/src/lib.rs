//! HTTP API server for the one-click checkout service.
//!
//! Exposes the checkout endpoint and order reads with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod context;
pub mod error;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use domain::{
    Address, Channel, CheckoutService, CommerceStore, Customer, CustomerId, Money, ProductVariant,
};
use metrics_exporter_prometheus::PrometheusHandle;
use store::InMemoryStore;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CommerceStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let cors = cors_layer(&state.config);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/order/one-click-checkout",
            post(routes::checkout::one_click::<S>),
        )
        .route("/orders/{id}", get(routes::orders::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Creates application state over an in-memory store seeded with a demo
/// catalog. Returns the demo customer's ID for use as a bearer token.
pub async fn create_default_state(config: Config) -> (Arc<AppState<InMemoryStore>>, CustomerId) {
    let store = InMemoryStore::new();

    store
        .insert_channel(Channel::new("WEB", "Web Store", "USD"))
        .await;
    store
        .insert_variant(ProductVariant::new(
            "MUG-BLUE",
            "Blue Mug",
            Money::from_cents(1500),
        ))
        .await;

    let customer_id = CustomerId::new();
    store
        .insert_customer(Customer::new(
            customer_id,
            "demo@example.com",
            Some(Address::new("123 Main St", "Springfield", "12345", "US")),
        ))
        .await;

    let state = Arc::new(AppState {
        checkout_service: CheckoutService::new(store),
        config,
    });

    (state, customer_id)
}
