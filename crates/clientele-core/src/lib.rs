//! # Clientele Core
//!
//! Core types, traits, and error definitions for the Clientele customer
//! management backend. This crate provides the foundational abstractions
//! used across all layers of the Clean Architecture implementation.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
