use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use pizzeria_core::{DomainError, DomainResult, ItemId};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(alias = "pizza_id")]
    pub item_id: ItemId,
    pub quantity: i64,
}

impl CreateOrderRequest {
    /// Decode a raw request body. The declared content type is not consulted.
    pub fn decode(body: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(body).map_err(|e| DomainError::malformed(e.to_string()))
    }
}

// -------------------------
// JSON response encoding
// -------------------------

/// Serialize `value` as the response body.
///
/// An encode failure only fails this request: it is logged and answered with
/// a 500.
pub fn json_response<T>(status: StatusCode, value: &T) -> axum::response::Response
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(value) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode response body: {e}");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to encode response",
            )
        }
    }
}
