//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared state handle (catalog + order ledger)
//! - `routes/`: HTTP routes + handlers (one file per endpoint)
//! - `dto.rs`: request DTOs and JSON response encoding
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router()
        .fallback(errors::route_not_found)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
