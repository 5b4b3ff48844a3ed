//! Router configuration and setup.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::any,
    Router,
};
use std::time::Duration;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{config::ApiConfig, middleware, routes, traits::ApiState};

/// Configure routes and middleware.
///
/// Every route accepts any method. Read endpoints answer regardless of
/// method; the administrative POST endpoints reject other methods
/// themselves with a plain-text 405. Unmatched paths fall through to the
/// repository lookup.
pub fn configure_routes(state: ApiState, config: &ApiConfig) -> Router {
    let router = Router::new()
        .route("/api/ping", any(routes::system::ping))
        .route("/api/version", any(routes::system::version))
        .route("/api/conf", any(routes::admin::get_configuration))
        .route("/config/panel", any(routes::admin::panel))
        .route("/api/config", any(routes::admin::update_configuration))
        .route("/api/config/reload", any(routes::admin::reload_configuration))
        .route("/index.html", any(routes::repos::index))
        .fallback(routes::repos::repository);

    // Order matters: later layers wrap earlier ones.
    router
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(from_fn_with_state(state.clone(), middleware::response_headers))
        .layer(from_fn(middleware::access_log))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .with_state(state)
}
