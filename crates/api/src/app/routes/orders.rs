use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{Extension, rejection::BytesRejection},
    http::StatusCode,
    routing::get,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route(
        "/",
        get(list_orders)
            .post(create_order)
            .fallback(errors::method_not_allowed),
    )
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Bytes, BytesRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let status = rejection.status();
            let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "payload_too_large"
            } else {
                "bad_request"
            };
            tracing::warn!("order body rejected: {}", rejection.body_text());
            return errors::json_error(status, code, rejection.body_text());
        }
    };

    match services.place_order(&body) {
        Ok(order) => {
            tracing::info!(
                item_id = %order.item_id,
                quantity = order.quantity,
                total = order.total,
                "order placed"
            );
            dto::json_response(StatusCode::CREATED, &order)
        }
        Err(e) => {
            tracing::warn!("order rejected: {e}");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.orders_list() {
        Ok(orders) => dto::json_response(StatusCode::OK, &orders),
        Err(e) => errors::domain_error_to_response(e),
    }
}
