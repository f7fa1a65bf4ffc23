use axum::{Router, routing::get};

pub mod orders;
pub mod pizzas;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/pizzas", pizzas::router())
        .nest("/orders", orders::router())
}
