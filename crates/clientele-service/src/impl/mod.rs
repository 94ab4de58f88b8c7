//! Customer service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `customer_service.rs`).

pub mod customer_service_impl;

pub use customer_service_impl::CustomerServiceImpl;
