//! API error type and its HTTP mapping
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use vpngrid_core::GridError;
use vpngrid_render::RenderError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Grid(GridError::CatalogUnavailable(_))
            | Self::Render(RenderError::Grid(GridError::CatalogUnavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Grid(GridError::UnknownServer(_) | GridError::UnknownCountry { .. }) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(GridError::CatalogUnavailable("io".into())).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(GridError::UnknownServer("svZ".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RenderError::Render("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(GridError::InvalidColumns(0)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
