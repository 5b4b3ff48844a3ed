//! API route handlers.
//!
//! | Path | Handler |
//! |---|---|
//! | `/api/ping` | [`system::ping`] |
//! | `/api/version` | [`system::version`] |
//! | `/api/conf` | [`admin::get_configuration`] |
//! | `/config/panel` | [`admin::panel`] |
//! | `/api/config` | [`admin::update_configuration`] |
//! | `/api/config/reload` | [`admin::reload_configuration`] |
//! | `/index.html` | [`repos::index`] |
//! | anything else | [`repos::repository`] |

pub mod admin;
pub mod repos;
pub mod system;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiResult;

/// Indented `application/json` response.
pub(crate) fn pretty_json<T: Serialize>(value: &T) -> ApiResult<Response> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Compact `application/json` response.
pub(crate) fn compact_json<T: Serialize>(value: &T) -> ApiResult<Response> {
    let body = serde_json::to_string(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
