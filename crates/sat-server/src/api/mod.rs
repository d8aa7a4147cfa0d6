//! HTTP handlers.

pub mod extract;
pub mod files;
pub mod health;

pub use extract::extract;
pub use files::{download, list_files};
pub use health::{health_routes, root};
