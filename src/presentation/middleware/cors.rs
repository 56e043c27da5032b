//! CORS Middleware Configuration

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Build the CORS layer from settings. Falls back to a permissive
/// policy when no configured origin parses.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(origins)
            .max_age(std::time::Duration::from_secs(3600))
    }
}
