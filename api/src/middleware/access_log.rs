//! One log line per request.

use axum::{
    extract::{ConnectInfo, Request},
    http::header::USER_AGENT,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

const REAL_IP_HEADER: &str = "x-real-ip";

/// Log remote address, method, URI and user agent.
///
/// Health pings are skipped.
pub async fn access_log(request: Request, next: Next) -> Response {
    if is_logged(request.uri().path()) {
        let user_agent = request
            .headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info!(
            remote = %remote_addr(&request),
            method = %request.method(),
            uri = %request.uri(),
            user_agent = %user_agent,
            "request"
        );
    }
    next.run(request).await
}

fn is_logged(path: &str) -> bool {
    path != "/api/ping"
}

/// Client address: `X-Real-Ip` when a reverse proxy set it, otherwise the
/// peer address, otherwise `-`.
fn remote_addr(request: &Request) -> String {
    request
        .headers()
        .get(REAL_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.to_string())
        })
        .unwrap_or_else(|| "-".to_string())
}
