//! Administrative endpoints: export, panel, replace and reload.
//!
//! Replacement is whole-document: the POST body is a complete
//! configuration and either becomes active as a unit or is rejected.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
    response::{Html, Response},
};
use serde::Serialize;

use common::{Configuration, StateError};

use crate::error::{ApiError, ApiResult};
use crate::routes::{compact_json, pretty_json};
use crate::traits::ApiState;

/// Body of successful administrative POSTs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    /// Always `"success"`
    pub status: &'static str,
    /// Human-readable outcome
    pub message: &'static str,
}

impl StatusResponse {
    fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// `GET /api/conf`
pub async fn get_configuration(State(state): State<ApiState>) -> ApiResult<Response> {
    pretty_json(&state.provider.current_configuration())
}

/// `GET /config/panel`
pub async fn panel(State(state): State<ApiState>) -> ApiResult<Html<String>> {
    let config = state.provider.current_configuration();
    Ok(Html(state.renderer.panel(&config)?))
}

/// `POST /api/config`
pub async fn update_configuration(
    State(state): State<ApiState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Response> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Configuration body unreadable");
        ApiError::BadRequest("Failed to read request body".to_string())
    })?;

    let config = Configuration::from_json_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Configuration body is not valid JSON");
        ApiError::BadRequest("Invalid JSON format".to_string())
    })?;

    let paths = state.provider.replace(config)?;
    tracing::info!(paths, "Configuration updated via API");

    compact_json(&StatusResponse::success("Configuration updated successfully"))
}

/// `POST /api/config/reload`
///
/// Re-reads the file the server was started with. Any failure, including
/// invalid file contents, is a server-side problem and maps to 500.
pub async fn reload_configuration(
    State(state): State<ApiState>,
    method: Method,
) -> ApiResult<Response> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let provider = state.provider.clone();
    let outcome = tokio::task::spawn_blocking(move || provider.reload())
        .await
        .map_err(|e| ApiError::Internal(format!("reload task failed: {}", e)))?;

    match outcome {
        Ok(paths) => {
            tracing::info!(paths, "Configuration reloaded via API");
            compact_json(&StatusResponse::success("Configuration reloaded successfully"))
        }
        Err(StateError::InvalidConfiguration(reason)) => {
            Err(ApiError::Internal(format!("reloaded configuration is invalid: {}", reason)))
        }
        Err(e) => Err(e.into()),
    }
}
