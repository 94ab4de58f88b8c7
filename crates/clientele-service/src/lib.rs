//! # Clientele Service
//!
//! Business logic service layer for the Clientele customer backend.
//! Contains use cases and application services.

pub mod customer_service;
pub mod dto;
mod r#impl;

pub use customer_service::*;
pub use dto::*;
pub use r#impl::*;
