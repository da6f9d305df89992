//! Application setup and server configuration.

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_booking_handler, create_event_handler, get_event_handler, health_handler,
    list_events_handler, similar_events_handler,
};

/// Request body cap. Images are limited to 10MB in the creation flow;
/// the transport limit leaves headroom for the remaining form fields so
/// oversized images still get a structured image_too_large response.
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Build the axum application
pub fn build_app(deps: ServerDeps, cors_allowed_origin: Option<&str>) -> Result<Router> {
    let cors = match cors_allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .context("Invalid CORS_ALLOWED_ORIGIN")?,
            )
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
    };

    Ok(Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/events",
            get(list_events_handler).post(create_event_handler),
        )
        .route("/api/events/:slug", get(get_event_handler))
        .route("/api/events/:slug/similar", get(similar_events_handler))
        .route("/api/bookings", post(create_booking_handler))
        .layer(Extension(deps))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
