//! Repository trait definitions.

use async_trait::async_trait;
use clientele_core::{ClienteleResult, Customer, CustomerId, NewCustomer};

/// Customer store trait.
///
/// Implementations raise no domain errors: absence is reported through
/// `Option`/`bool` returns and `delete`/`update` are no-ops for missing
/// ids. Mapping absence to `NotFound` is the service layer's job.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns all customers.
    async fn find_all(&self) -> ClienteleResult<Vec<Customer>>;

    /// Finds a customer by ID.
    async fn find_by_id(&self, id: CustomerId) -> ClienteleResult<Option<Customer>>;

    /// Finds a customer by email.
    async fn find_by_email(&self, email: &str) -> ClienteleResult<Option<Customer>>;

    /// Checks if a customer with the given ID exists.
    async fn exists_by_id(&self, id: CustomerId) -> ClienteleResult<bool>;

    /// Checks if a customer with the given email exists (case-insensitive).
    async fn exists_by_email(&self, email: &str) -> ClienteleResult<bool>;

    /// Inserts a new customer. The store assigns the ID.
    async fn insert(&self, customer: &NewCustomer) -> ClienteleResult<()>;

    /// Updates the customer row matching the entity's ID. No-op when absent.
    async fn update(&self, customer: &Customer) -> ClienteleResult<()>;

    /// Deletes a customer by ID. No-op when absent.
    async fn delete(&self, id: CustomerId) -> ClienteleResult<()>;
}
