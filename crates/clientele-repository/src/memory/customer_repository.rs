//! In-memory customer repository implementation.

use crate::traits::CustomerRepository;
use async_trait::async_trait;
use clientele_core::{
    ClienteleError, ClienteleResult, Customer, CustomerId, Email, Gender, NewCustomer, StoreHealth,
};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

struct MemoryState {
    customers: Vec<Customer>,
    next_id: i64,
}

/// In-memory customer repository.
///
/// An explicitly constructed instance; state lives behind a mutex on the
/// instance, never in a global. Update replaces the matching record in
/// place, and email lookups match on email, mirroring the relational
/// variant's behavior.
pub struct MemoryCustomerRepository {
    state: Mutex<MemoryState>,
}

impl MemoryCustomerRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                customers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a repository pre-populated with demo customers.
    #[must_use]
    pub fn seeded() -> Self {
        let customers = vec![
            Customer::new(
                CustomerId::new(1),
                "Alex".to_string(),
                Email::new_unchecked("alex@gmail.com"),
                "password".to_string(),
                21,
                Gender::Male,
            ),
            Customer::new(
                CustomerId::new(2),
                "Jamila".to_string(),
                Email::new_unchecked("jamila@gmail.com"),
                "password".to_string(),
                19,
                Gender::Female,
            ),
        ];

        Self {
            state: Mutex::new(MemoryState {
                customers,
                next_id: 3,
            }),
        }
    }

    /// Locks the store state, reporting a poisoned mutex as an error.
    fn lock(&self) -> ClienteleResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| ClienteleError::internal("customer store mutex poisoned"))
    }
}

impl Default for MemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MemoryCustomerRepository {
    async fn find_all(&self) -> ClienteleResult<Vec<Customer>> {
        Ok(self.lock()?.customers.clone())
    }

    async fn find_by_id(&self, id: CustomerId) -> ClienteleResult<Option<Customer>> {
        Ok(self.lock()?.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> ClienteleResult<Option<Customer>> {
        let email = email.to_lowercase();
        Ok(self
            .lock()?
            .customers
            .iter()
            .find(|c| c.email.as_str() == email)
            .cloned())
    }

    async fn exists_by_id(&self, id: CustomerId) -> ClienteleResult<bool> {
        Ok(self.lock()?.customers.iter().any(|c| c.id == id))
    }

    async fn exists_by_email(&self, email: &str) -> ClienteleResult<bool> {
        let email = email.to_lowercase();
        Ok(self
            .lock()?
            .customers
            .iter()
            .any(|c| c.email.as_str() == email))
    }

    async fn insert(&self, customer: &NewCustomer) -> ClienteleResult<()> {
        let mut state = self.lock()?;
        let id = CustomerId::new(state.next_id);
        state.next_id += 1;

        debug!("Inserting customer {} with id {}", customer.email, id);
        let customer = customer.clone().into_customer(id);
        state.customers.push(customer);
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> ClienteleResult<()> {
        let mut state = self.lock()?;
        if let Some(existing) = state.customers.iter_mut().find(|c| c.id == customer.id) {
            *existing = customer.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> ClienteleResult<()> {
        let mut state = self.lock()?;
        state.customers.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MemoryCustomerRepository {
    async fn check(&self) -> ClienteleResult<()> {
        self.lock().map(|_| ())
    }
}

impl std::fmt::Debug for MemoryCustomerRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCustomerRepository").finish_non_exhaustive()
    }
}
