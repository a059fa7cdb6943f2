//! Iconpack Server - Axum server for icon pack settings and discovery.

pub mod config;
pub mod form;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;
