//! Photo gallery server.
//!
//! Fetches a folder of photos from a Directus instance on every request,
//! sorts them newest first, and renders them into a single HTML page with
//! camera and exposure details derived from their EXIF metadata.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;
