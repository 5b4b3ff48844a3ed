//! Middleware applied to every route.

mod access_log;
mod headers;

pub use access_log::access_log;
pub use headers::response_headers;
