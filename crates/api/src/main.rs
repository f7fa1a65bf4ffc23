use std::sync::Arc;

use anyhow::Context;

use pizzeria_api::{app, config::ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pizzeria_observability::init();

    let config = ServerConfig::from_env()?;
    let catalog = config.load_catalog()?;
    tracing::info!(
        items = catalog.len(),
        policy = ?config.quantity_policy,
        "catalog loaded"
    );

    let services = Arc::new(app::services::AppServices::in_memory(
        catalog,
        config.quantity_policy,
    ));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
