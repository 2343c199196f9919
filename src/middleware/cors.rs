use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Restricts browsers to one origin when configured, otherwise allows any.
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => layer.allow_origin(value),
            Err(e) => {
                tracing::warn!(origin, error = %e, "Ignoring invalid CORS origin");
                layer.allow_origin(Any)
            }
        },
        None => layer.allow_origin(Any),
    }
}
