//! HTTP access to the downloads API for the dashboard views.

pub mod api;
pub mod config;
pub mod http;
pub mod loader;

pub use http::ApiClient;
pub use loader::*;
