//! In-memory store implementations.

pub mod customer_repository;

pub use customer_repository::MemoryCustomerRepository;
