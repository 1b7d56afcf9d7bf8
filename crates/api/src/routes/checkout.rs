//! One-click checkout endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::{ChannelCode, CommerceStore, LocaleCode, OneClickCheckout};
use serde::Deserialize;

use crate::context::{ChannelContext, CustomerContext};
use crate::error::ApiError;
use crate::routes::AppState;
use crate::views;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneClickCheckoutRequest {
    pub product_variant_code: String,
    pub locale_code: Option<String>,
}

/// POST /order/one-click-checkout — buy one unit of a variant in one request.
#[tracing::instrument(skip(state, req), fields(customer = %customer_id, variant = %req.product_variant_code))]
pub async fn one_click<S: CommerceStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CustomerContext(customer_id): CustomerContext,
    ChannelContext(channel): ChannelContext,
    Json(req): Json<OneClickCheckoutRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let mut cmd = OneClickCheckout::new(
        req.product_variant_code,
        req.locale_code.map(LocaleCode::new),
    );

    // Header wins over the configured default channel
    let channel = channel.or_else(|| {
        state
            .config
            .default_channel_code
            .clone()
            .map(ChannelCode::new)
    });
    cmd.set_channel_code(channel);

    let order = state
        .checkout_service
        .one_click_checkout(customer_id, cmd)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(views::order_json(&order, views::SHOP_ORDER_ONE_CLICK)),
    ))
}
