//! # Clientele Config
//!
//! Layered configuration loading: TOML files plus `CLIENTELE_`-prefixed
//! environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
