use axum::http::StatusCode;

use crate::app::dto;

pub async fn health() -> axum::response::Response {
    dto::json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
}
