use std::sync::Arc;

use axum::{Router, extract::Extension, http::StatusCode, routing::get};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_pizzas).fallback(errors::method_not_allowed))
}

pub async fn list_pizzas(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog_list() {
        Ok(items) => dto::json_response(StatusCode::OK, items),
        Err(e) => errors::domain_error_to_response(e),
    }
}
