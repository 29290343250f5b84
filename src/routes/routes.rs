//! Defines the gallery's HTTP surface.
//!
//! ## Structure
//! - `GET /`                 -> rendered gallery page
//! - `GET /assets/{*path}`   -> embedded static files
//! - anything else           -> 405 for non-GET methods, otherwise 404

use crate::{
    handlers::{
        asset_handlers::serve_asset,
        gallery_handlers::{fallback, home},
    },
    services::catalog::CatalogClient,
};
use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

/// Build the router for all gallery routes.
///
/// The router carries the shared `CatalogClient` to the handlers that need it.
pub fn routes() -> Router<CatalogClient> {
    Router::new()
        .route("/", any(home))
        .route("/assets/{*path}", get(serve_asset))
        .fallback(fallback)
}

/// The complete application: routes, state, and request tracing.
pub fn build_app(catalog: CatalogClient) -> Router {
    routes()
        .with_state(catalog)
        .layer(TraceLayer::new_for_http())
}
