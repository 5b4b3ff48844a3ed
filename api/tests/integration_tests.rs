//! Integration tests for the API.
//!
//! Every test drives the full router (middleware included) against a real
//! `appstate::StateManager`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use appstate::{ConfigSource, StateManager};
use common::{Configuration, PathSpec};
use govanity_api::{build_router, ApiConfig, VanityStateProvider};

fn example_config() -> Configuration {
    Configuration::new("example.com").with_path("/pkg", PathSpec::git("https://github.com/x/pkg"))
}

fn create_test_router(state: Arc<StateManager>) -> Router {
    let provider: Arc<dyn VanityStateProvider> = state;
    build_router(provider, &ApiConfig::default()).expect("templates compile")
}

fn example_router() -> (Arc<StateManager>, Router) {
    let state = Arc::new(StateManager::initialize(example_config()).expect("valid config"));
    let app = create_test_router(state.clone());
    (state, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_repository_page_has_go_import() {
    let (_state, app) = example_router();

    let (status, headers, body) = send(&app, get("/pkg?go-get=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains(
        r#"<meta name="go-import" content="example.com/pkg git https://github.com/x/pkg">"#
    ));
    assert!(body.contains(
        "example.com/pkg https://github.com/x/pkg https://github.com/x/pkg/tree/master{/dir} \
         https://github.com/x/pkg/blob/master{/dir}/{file}#L{line}"
    ));
}

#[tokio::test]
async fn test_trailing_slash_resolves_same_repository() {
    let (_state, app) = example_router();

    let (status, _, body) = send(&app, get("/pkg/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("example.com/pkg git https://github.com/x/pkg"));
}

#[tokio::test]
async fn test_percent_encoded_path_resolves_same_repository() {
    let config =
        example_config().with_path("/pkg~v2", PathSpec::git("https://github.com/x/pkg2"));
    let state = Arc::new(StateManager::initialize(config).unwrap());
    let app = create_test_router(state);

    let (raw_status, _, raw_body) = send(&app, get("/pkg~v2")).await;
    let (status, _, body) = send(&app, get("/pkg%7Ev2?go-get=1")).await;

    assert_eq!(raw_status, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, raw_body);
    assert!(body.contains("example.com/pkg~v2 git https://github.com/x/pkg2"));
}

#[tokio::test]
async fn test_undecodable_path_is_404() {
    let (_state, app) = example_router();

    let (status, _, body) = send(&app, get("/pkg%FF")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "unknown path");
}

#[tokio::test]
async fn test_read_endpoints_answer_any_method() {
    let (_state, app) = example_router();

    let (status, _, body) = send(&app, post("/index.html", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("example.com/pkg (git)"));

    let (status, headers, body) = send(&app, post("/api/conf", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert!(body.contains("\"host\": \"example.com\""));

    let (status, _, body) = send(&app, post("/api/ping", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn test_index_lists_repositories() {
    let (_state, app) = example_router();

    let (status, _, body) = send(&app, get("/index.html")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="https://github.com/x/pkg">example.com/pkg (git)</a>"#));
}

#[tokio::test]
async fn test_empty_paths_rejected_and_state_kept() {
    let (_state, app) = example_router();

    let body = json!({ "host": "example.com", "paths": {} }).to_string();
    let (status, headers, text) = send(&app, post("/api/config", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(text, "At least one path configuration is required");

    let (status, _, body) = send(&app, get("/pkg")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("example.com/pkg git https://github.com/x/pkg"));
}

#[tokio::test]
async fn test_unknown_path_is_plain_text_404() {
    let (_state, app) = example_router();

    let (status, headers, body) = send(&app, get("/nonexistent")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(body, "unknown path");
}

#[tokio::test]
async fn test_admin_endpoints_require_post() {
    let (_state, app) = example_router();

    for uri in ["/api/config", "/api/config/reload"] {
        let (status, _, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert_eq!(body, "Method not allowed");
    }
}

#[tokio::test]
async fn test_invalid_json_rejected() {
    let (state, app) = example_router();
    let before = state.list_all();

    let (status, _, body) = send(&app, post("/api/config", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid JSON format");
    assert!(Arc::ptr_eq(&before, &state.list_all()));
}

#[tokio::test]
async fn test_update_configuration_swaps_routes() {
    let (state, app) = example_router();

    let body = json!({
        "host": "go.example.org",
        "cache_max_age": 60,
        "paths": {
            "/tool": { "repo": "https://gitlab.com/x/tool", "vcs": "git" }
        }
    })
    .to_string();
    let (status, _, text) = send(&app, post("/api/config", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text,
        r#"{"status":"success","message":"Configuration updated successfully"}"#
    );
    assert_eq!(state.current_configuration().host, "go.example.org");

    let (status, headers, body) = send(&app, get("/tool")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=60");
    assert!(body.contains("go.example.org/tool git https://gitlab.com/x/tool"));
    assert!(body.contains("https://gitlab.com/x/tool/-/tree/master{/dir}"));

    let (status, _, _) = send(&app, get("/pkg")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_common_headers() {
    let (_state, app) = example_router();

    for uri in ["/pkg", "/index.html", "/nonexistent", "/api/ping"] {
        let (_, headers, _) = send(&app, get(uri)).await;
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=86400", "{}", uri);
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(headers.contains_key("x-go-vanity-server-build"));
        assert_eq!(headers["x-go-vanity-server-version"], env!("CARGO_PKG_VERSION"));
    }
}

#[tokio::test]
async fn test_ping() {
    let (_state, app) = example_router();

    let (status, _, body) = send(&app, get("/api/ping")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn test_version() {
    let (_state, app) = example_router();

    let (status, headers, body) = send(&app, get("/api/version")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let info: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(info["name"], "govanity");
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_configuration_export() {
    let (_state, app) = example_router();

    let (status, headers, body) = send(&app, get("/api/conf")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert!(body.contains('\n'), "export is indented");
    let config: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(config["host"], "example.com");
    assert_eq!(config["cache_max_age"], 86400);
    assert_eq!(config["paths"]["/pkg"]["repo"], "https://github.com/x/pkg");
    assert_eq!(config["paths"]["/pkg"]["vcs"], "git");
}

#[tokio::test]
async fn test_exported_configuration_round_trips_through_update() {
    let (state, app) = example_router();

    let (_, _, exported) = send(&app, get("/api/conf")).await;
    let (status, _, _) = send(&app, post("/api/config", exported)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.current_configuration(), example_config());
}

#[tokio::test]
async fn test_panel_is_prefilled() {
    let (_state, app) = example_router();

    let (status, _, body) = send(&app, get("/config/panel")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("example.com"));
    assert!(body.contains("https://github.com/x/pkg"));
}

#[tokio::test]
async fn test_reload_without_source_fails() {
    let (state, app) = example_router();
    let before = state.list_all();

    let (status, headers, _) = send(&app, post("/api/config/reload", Body::empty())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert!(Arc::ptr_eq(&before, &state.list_all()));
}

#[tokio::test]
async fn test_reload_reads_source_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vanity.yaml");
    std::fs::write(
        &path,
        "host: example.com\npaths:\n  /pkg:\n    repo: https://github.com/x/pkg\n",
    )
    .unwrap();

    let state = Arc::new(StateManager::from_source(ConfigSource::file(&path)).unwrap());
    let app = create_test_router(state.clone());

    std::fs::write(
        &path,
        "host: example.com\npaths:\n  /other:\n    repo: https://hg.example.com/other\n    vcs: hg\n",
    )
    .unwrap();

    let (status, _, text) = send(&app, post("/api/config/reload", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        text,
        r#"{"status":"success","message":"Configuration reloaded successfully"}"#
    );

    let (status, _, body) = send(&app, get("/other")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("example.com/other hg https://hg.example.com/other"));

    let (status, _, _) = send(&app, get("/pkg")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reload_of_invalid_file_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vanity.json");
    std::fs::write(&path, serde_json::to_string(&example_config()).unwrap()).unwrap();

    let state = Arc::new(StateManager::from_source(ConfigSource::file(&path)).unwrap());
    let app = create_test_router(state.clone());

    std::fs::write(&path, r#"{"host":"example.com","paths":{}}"#).unwrap();

    let (status, _, _) = send(&app, post("/api/config/reload", Body::empty())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = send(&app, get("/pkg")).await;
    assert_eq!(status, StatusCode::OK);
}
