//! Request context extractors for customer and channel resolution.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use domain::{ChannelCode, CustomerId};

use crate::error::ApiError;

/// Header carrying the sales channel code for the request.
pub const CHANNEL_CODE_HEADER: &str = "x-channel-code";

/// The authenticated customer, resolved from `Authorization: Bearer <uuid>`.
///
/// Rejects with 401 when the header is missing or does not carry a UUID.
#[derive(Debug, Clone, Copy)]
pub struct CustomerContext(pub CustomerId);

impl<S> FromRequestParts<S> for CustomerContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated)?;
        let uuid = uuid::Uuid::parse_str(token).map_err(|_| ApiError::Unauthenticated)?;

        Ok(CustomerContext(CustomerId::from_uuid(uuid)))
    }
}

/// The sales channel requested via the `X-Channel-Code` header, if any.
///
/// The handler falls back to the configured default channel when absent.
#[derive(Debug, Clone)]
pub struct ChannelContext(pub Option<ChannelCode>);

impl<S> FromRequestParts<S> for ChannelContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(CHANNEL_CODE_HEADER) {
            None => Ok(ChannelContext(None)),
            Some(value) => {
                let code = value.to_str().map_err(|_| {
                    ApiError::BadRequest("invalid X-Channel-Code header".to_string())
                })?;
                Ok(ChannelContext(Some(ChannelCode::new(code))))
            }
        }
    }
}
