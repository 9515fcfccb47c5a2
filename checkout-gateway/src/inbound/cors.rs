//! CORS configuration.
//!
//! The storefront deployments differ only in which origins they allow, so
//! the origin list is configuration rather than separate code paths. The
//! layer itself answers preflight requests.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS policy for the gateway's public endpoints.
#[derive(Debug, Clone, Default)]
pub struct CorsOptions {
    /// Origins allowed to call the gateway. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsOptions {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Builds the tower-http layer for this policy.
    pub fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        if self.allowed_origins.is_empty() {
            layer.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}
