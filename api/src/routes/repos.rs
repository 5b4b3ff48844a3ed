//! Index listing and per-repository `go-import` pages.

use axum::{extract::State, http::Uri, response::Html};
use std::borrow::Cow;

use crate::error::{ApiError, ApiResult};
use crate::traits::ApiState;

/// `GET /index.html`
pub async fn index(State(state): State<ApiState>) -> ApiResult<Html<String>> {
    let table = state.provider.list_all();
    Ok(Html(state.renderer.index(&table)?))
}

/// Fallback for every other path.
///
/// Only the percent-decoded URI path takes part in the lookup; the
/// `?go-get=1` query the `go` tool appends is ignored.
pub async fn repository(State(state): State<ApiState>, uri: Uri) -> ApiResult<Html<String>> {
    let path = decode_path(uri.path())?;
    let repo = state.provider.lookup(&path)?;
    tracing::debug!(path = %repo.path(), import = %repo.import_path(), "Serving repository");
    Ok(Html(state.renderer.repository(&repo)?))
}

/// Percent-decode a request path. A path that does not decode to UTF-8
/// cannot name a configured repository.
fn decode_path(raw: &str) -> ApiResult<Cow<'_, str>> {
    urlencoding::decode(raw).map_err(|e| {
        tracing::debug!(path = raw, error = %e, "Undecodable request path");
        ApiError::NotFound("unknown path".to_string())
    })
}
