//! Common response headers.
//!
//! The cache lifetime is read from the provider after the handler ran, so a
//! response always advertises the configuration active when it was sent.

use axum::{
    extract::{Request, State},
    http::{
        header::{CACHE_CONTROL, X_CONTENT_TYPE_OPTIONS},
        HeaderName, HeaderValue,
    },
    middleware::Next,
    response::Response,
};

use crate::traits::ApiState;
use crate::version::{BUILD_CODE, VERSION};

/// Build identifier header.
pub const BUILD_HEADER: HeaderName = HeaderName::from_static("x-go-vanity-server-build");

/// Version header.
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("x-go-vanity-server-version");

/// Add cache, sniffing and build identification headers.
pub async fn response_headers(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    let cache = format!("public, max-age={}", state.provider.cache_max_age());
    if let Ok(value) = HeaderValue::from_str(&cache) {
        headers.insert(CACHE_CONTROL, value);
    }
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    if let Ok(value) = HeaderValue::from_str(BUILD_CODE) {
        headers.insert(BUILD_HEADER, value);
    }
    headers.insert(VERSION_HEADER, HeaderValue::from_static(VERSION));

    response
}
