//! Gallery page handlers.
//!
//! - GET /      -> fetch the catalog and render the page
//! - anything else outside `/assets` -> 405 for non-GET methods, else 404
//!
//! The method is checked before the path, so `POST /missing` is a 405.

use crate::{errors::AppError, services::catalog::CatalogClient, views::gallery::home_page};
use axum::{extract::State, http::Method, response::Html};
use tracing::warn;

/// `GET /`
///
/// Fetches every photo on each request; a catalog failure becomes a 500 whose
/// body is the error text.
pub async fn home(
    method: Method,
    State(catalog): State<CatalogClient>,
) -> Result<Html<String>, AppError> {
    if method != Method::GET {
        return Err(AppError::method_not_allowed());
    }

    let photos = catalog.fetch_photos().await.map_err(|err| {
        warn!("Failed to fetch photo catalog: {}", err);
        AppError::from(err)
    })?;

    Ok(Html(home_page(&catalog.remote, &photos).into_string()))
}

/// Router fallback for every unmatched path.
pub async fn fallback(method: Method) -> AppError {
    if method != Method::GET {
        AppError::method_not_allowed()
    } else {
        AppError::not_found()
    }
}
