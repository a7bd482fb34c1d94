use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::mock;
use service::{aggregator::AggregatorClient, file::review_store::ReviewStore};

use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Aggregator settings come from config.toml when present; env vars and
/// built-in defaults cover the rest.
fn load_aggregator_config() -> anyhow::Result<configs::AggregatorConfig> {
    let mut cfg = configs::load_default().map(|c| c.aggregator).unwrap_or_default();
    cfg.normalize_from_env();
    cfg.validate()?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    common::env::ensure_data_dir("data").await?;

    // Moderation state, seeded from the fixture on first run
    let data_file =
        env::var("REVIEWS_DATA_PATH").unwrap_or_else(|_| "data/reviews.json".to_string());
    let review_store = ReviewStore::new(&data_file, mock::mock_reviews()).await?;

    let aggregator_cfg = load_aggregator_config()?;
    info!(base_url = %aggregator_cfg.base_url, "aggregator upstream configured");
    let aggregator = AggregatorClient::from_config(&aggregator_cfg)?;

    let state = ServerState {
        reviews: review_store,
        properties: Arc::new(mock::mock_properties()),
        aggregator: Arc::new(aggregator),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting review dashboard server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
