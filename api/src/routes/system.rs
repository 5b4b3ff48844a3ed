//! Liveness and version endpoints.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::ApiResult;
use crate::routes::pretty_json;
use crate::version::VersionInfo;

/// `GET /api/ping`
pub async fn ping() -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "pong").into_response()
}

/// `GET /api/version`
pub async fn version() -> ApiResult<Response> {
    pretty_json(&VersionInfo::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_ping() {
        let response = ping().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[test]
    fn test_version_is_json() {
        let response = tokio_test::block_on(version()).unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }
}
