//! HTML views, rendered with compile-time checked `maud` markup.
//!
//! Interpolated values are escaped by `maud`, so labels and titles taken
//! from the catalog can be placed in the page as-is.

pub mod gallery;
