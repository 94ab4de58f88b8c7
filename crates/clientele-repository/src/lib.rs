//! # Clientele Repository
//!
//! Customer store implementations. The [`CustomerRepository`] trait has
//! two implementations, selected by configuration at startup:
//!
//! - [`MySqlCustomerRepository`]: relational store over a SQLx pool.
//! - [`MemoryCustomerRepository`]: in-process store for demos and tests.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::MemoryCustomerRepository;
pub use mysql::MySqlCustomerRepository;
pub use pool::{create_pool, DatabasePool};
pub use traits::CustomerRepository;
