//! Order read endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::OrderId;
use domain::CommerceStore;

use crate::error::ApiError;
use crate::routes::AppState;
use crate::views;

/// GET /orders/:id — load a persisted order by ID.
#[tracing::instrument(skip(state))]
pub async fn get<S: CommerceStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let order = state
        .checkout_service
        .get_order(order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    Ok(Json(views::order_json(
        &order,
        views::SHOP_ORDER_ONE_CLICK,
    )))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    let uuid = uuid::Uuid::parse_str(id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid order ID format: {e}")))?;
    Ok(OrderId::from_uuid(uuid))
}
