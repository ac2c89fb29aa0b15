//! Situation-Map Service: Binary Entrypoint
//! Boots the Axum HTTP server, wiring the feed catalog, persisted state,
//! map session, and the periodic staged refresh.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use situation_map::api::{self, AppState};
use situation_map::ingest::config::FeedCatalog;
use situation_map::ingest::scheduler::{spawn_refresh_loop, REFRESH_INTERVAL_SECS};
use situation_map::store::{JsonStore, DEFAULT_STORE_PATH};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,refresh=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Optional Prometheus endpoint for the ingest counters.
    if std::env::var("METRICS_PROMETHEUS").ok().as_deref() == Some("1") {
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .install()
            .map_err(|e| anyhow::anyhow!("prometheus exporter: {e}"))?;
    }

    let feeds = FeedCatalog::load_default()?;
    let store = Arc::new(JsonStore::open(
        std::env::var("STATE_STORE_PATH").unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string()),
    ));
    let state = Arc::new(AppState::new(feeds, store));

    // First tick fires immediately, then every five minutes. A new cycle
    // never aborts an in-flight one.
    spawn_refresh_loop(state.clone(), REFRESH_INTERVAL_SECS);

    let router = api::create_router(state);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "situation-map listening");
    axum::serve(listener, router).await?;
    Ok(())
}
