//! Catalog access and presentation logic, kept free of HTTP concerns.

pub mod catalog;
pub mod display;
