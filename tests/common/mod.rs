//! Shared helpers for the integration tests.
//!
//! The remote catalog is faked by a real `axum` server on an ephemeral port,
//! so requests go through `reqwest` exactly as in production.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use photo_gallery::config::RemoteConfig;
use photo_gallery::routes::routes::build_app;
use photo_gallery::services::catalog::CatalogClient;
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const FOLDER_ID: &str = "folder-1";

/// Serve `router` on `127.0.0.1:0` in the background and return its base URL.
pub async fn spawn_catalog(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
pub async fn unreachable_host() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn remote(host: &str, token: Option<&str>) -> Arc<RemoteConfig> {
    Arc::new(RemoteConfig {
        host: host.to_string(),
        folder_id: FOLDER_ID.to_string(),
        token: token.map(str::to_string),
    })
}

pub fn catalog_client(host: &str, token: Option<&str>) -> CatalogClient {
    CatalogClient::new(remote(host, token))
}

/// The full application, pointed at the catalog served from `host`.
pub fn build_test_app(host: &str) -> Router {
    build_app(catalog_client(host, None))
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A Directus `/files` payload with three photos, deliberately out of order.
pub fn sample_files() -> serde_json::Value {
    serde_json::json!({
        "data": [
            {
                "id": "undated",
                "title": "Scan",
                "description": null,
                "width": 3000,
                "height": 2000,
                "metadata": null
            },
            {
                "id": "older",
                "title": "Harbour",
                "description": "Morning fog",
                "width": 6000,
                "height": 4000,
                "metadata": {
                    "ifd0": { "Make": "FUJIFILM", "Model": "X-T5" },
                    "exif": {
                        "ExposureTime": 0.5,
                        "FNumber": 8,
                        "ISOSpeedRatings": 125,
                        "DateTimeOriginal": "2021-05-01T14:03:00Z",
                        "FocalLength": 23,
                        "FocalLengthIn35mmFilm": 35,
                        "LensMake": "Viltrox",
                        "LensModel": "AF 23\u{0}mm"
                    }
                }
            },
            {
                "id": "newer",
                "title": "Ridge",
                "description": "",
                "width": 4000,
                "height": 6000,
                "metadata": {
                    "ifd0": { "Make": "SONY", "Model": "ILCE-7M3" },
                    "exif": {
                        "ExposureTime": 2,
                        "FNumber": 2.8,
                        "ISOSpeedRatings": 100,
                        "DateTimeOriginal": "2023-09-10T06:45:00Z",
                        "FocalLength": 50
                    }
                }
            }
        ]
    })
}
