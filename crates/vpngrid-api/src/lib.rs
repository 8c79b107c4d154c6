//! VPNGRID API: serves the chooser grid over HTTP
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

pub use config::ApiConfig;
pub use error::ApiError;

use axum::{middleware::from_fn, routing::get, Router};
use metrics::GridMetrics;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub metrics: Arc<GridMetrics>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Result<Self, prometheus::Error> {
        Ok(Self {
            config: Arc::new(config),
            metrics: Arc::new(GridMetrics::new()?),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/choose", get(handlers::choose))
        .route("/v1/grid", get(handlers::grid))
        .route("/v1/servers/{name}", get(handlers::server))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(middleware::request_span))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.addr.clone();
    let app = create_app(AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("VPNGRID API listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
