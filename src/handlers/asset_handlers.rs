//! Static assets compiled into the binary from the crate's `assets/` directory.

use crate::errors::AppError;
use axum::{
    body::Body,
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use bytes::Bytes;
use include_dir::{Dir, include_dir};

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// `GET /assets/{*path}`: the embedded file verbatim, or 404.
pub async fn serve_asset(Path(path): Path<String>) -> Result<Response, AppError> {
    let file = ASSETS.get_file(&path).ok_or_else(AppError::not_found)?;

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let mut response = Response::new(Body::from(Bytes::from_static(file.contents())));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(content_type.as_ref())
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );

    Ok(response)
}
