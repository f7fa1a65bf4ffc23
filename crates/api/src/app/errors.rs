use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::json;

use pizzeria_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::CatalogEmpty => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        DomainError::MalformedRequest(_) | DomainError::ItemNotFound(_) => {
            json_error(StatusCode::BAD_REQUEST, "bad_request", err.to_string())
        }
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvariantViolation(_) | DomainError::Storage(_) => {
            tracing::error!("request failed: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Method-router fallback: the path exists but the verb is not served.
pub async fn method_not_allowed(method: Method) -> axum::response::Response {
    json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "method_not_allowed",
        format!("method {method} not allowed"),
    )
}

pub async fn route_not_found(uri: Uri) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("no route for {}", uri.path()))
}
