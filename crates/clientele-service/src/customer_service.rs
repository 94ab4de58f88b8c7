//! Customer service trait definition.

use crate::dto::{CustomerRegistrationRequest, CustomerResponse, CustomerUpdateRequest};
use async_trait::async_trait;
use clientele_core::{ClienteleResult, CustomerId};

/// Customer service trait.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Returns all customers.
    async fn get_all_customers(&self) -> ClienteleResult<Vec<CustomerResponse>>;

    /// Gets a customer by ID.
    async fn get_customer(&self, id: CustomerId) -> ClienteleResult<CustomerResponse>;

    /// Registers a new customer.
    async fn add_customer(&self, request: CustomerRegistrationRequest) -> ClienteleResult<()>;

    /// Applies a partial update to a customer.
    async fn update_customer(
        &self,
        id: CustomerId,
        request: CustomerUpdateRequest,
    ) -> ClienteleResult<()>;

    /// Deletes a customer by ID.
    async fn delete_customer(&self, id: CustomerId) -> ClienteleResult<()>;
}
