//! Data transfer objects.

pub mod customer_dto;

pub use customer_dto::{CustomerRegistrationRequest, CustomerResponse, CustomerUpdateRequest};
