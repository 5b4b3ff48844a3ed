//! Shared router state.
//!
//! This module re-exports the state trait from `common` and bundles it with
//! the renderer so handlers get both from a single `State` extractor.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::render::Renderer;

pub use common::backend::VanityStateProvider;

/// State handed to every route.
///
/// Cheap to clone; both members are shared.
#[derive(Clone)]
pub struct ApiState {
    /// Configuration and routing state
    pub provider: Arc<dyn VanityStateProvider>,
    /// HTML renderer
    pub renderer: Arc<Renderer>,
}

impl ApiState {
    /// Bundle `provider` with a freshly built renderer.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Render` if a built-in template fails to compile.
    pub fn new(provider: Arc<dyn VanityStateProvider>) -> ApiResult<Self> {
        Ok(Self {
            provider,
            renderer: Arc::new(Renderer::new()?),
        })
    }
}
