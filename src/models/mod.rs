//! Data models for the photo catalog.
//!
//! These mirror the subset of the Directus `directus_files` collection the
//! gallery reads. They are decoded straight from JSON via `serde` and never
//! mutated afterwards.

pub mod photo;
