//! # Clientele Security
//!
//! Password hashing for the Clientele backend.

pub mod password;

pub use password::PasswordHasher;
