pub mod asset_handlers;
pub mod gallery_handlers;
