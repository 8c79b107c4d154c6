//! API Handlers
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};
use vpngrid_core::{build_grid, ChoiceGrid, DisplayTile, GridError, InMemoryCatalog, ServerResolver};
use vpngrid_render::render_choices;

use crate::error::ApiError;
use crate::AppState;

/// One catalog snapshot per request, read on the blocking pool
async fn load_catalog(state: &AppState) -> Result<InMemoryCatalog, ApiError> {
    let files = state.config.catalog.clone();
    let loaded = tokio::task::spawn_blocking(move || files.load())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    loaded.map_err(|e| {
        state.metrics.catalog_failures.inc();
        ApiError::Grid(GridError::from(e))
    })
}

pub async fn choose(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let catalog = load_catalog(&state).await?;
    let rendered = render_choices(&catalog, &state.config.grid, &state.config.render)?;

    state.metrics.renders.inc();
    state.metrics.skipped_entries.inc_by(rendered.skipped.len() as u64);

    Ok(Html(rendered.html))
}

pub async fn grid(State(state): State<AppState>) -> Result<Json<ChoiceGrid>, ApiError> {
    let catalog = load_catalog(&state).await?;
    let grid = build_grid(&catalog, &state.config.grid)?;

    state.metrics.renders.inc();
    state.metrics.skipped_entries.inc_by(grid.skipped.len() as u64);

    Ok(Json(grid))
}

pub async fn server(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DisplayTile>, ApiError> {
    let catalog = load_catalog(&state).await?;
    let tile = ServerResolver::new(&catalog).resolve_one(&name)?;
    Ok(Json(tile))
}

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .encode()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })),
    )
}
