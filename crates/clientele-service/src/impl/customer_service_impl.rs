//! Customer service implementation.

use crate::customer_service::CustomerService;
use crate::dto::{CustomerRegistrationRequest, CustomerResponse, CustomerUpdateRequest};
use async_trait::async_trait;
use clientele_core::{ClienteleError, ClienteleResult, CustomerId, ValidateExt};
use clientele_core::{Email, NewCustomer};
use clientele_repository::CustomerRepository;
use clientele_security::PasswordHasher;
use std::sync::Arc;
use tracing::{debug, info};

/// Customer service implementation, generic over the store.
pub struct CustomerServiceImpl<R: CustomerRepository> {
    customer_repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
}

impl<R: CustomerRepository> CustomerServiceImpl<R> {
    /// Creates a new customer service.
    pub fn new(customer_repository: Arc<R>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            customer_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R: CustomerRepository + 'static> CustomerService for CustomerServiceImpl<R> {
    async fn get_all_customers(&self) -> ClienteleResult<Vec<CustomerResponse>> {
        debug!("Getting all customers");

        let customers = self.customer_repository.find_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    async fn get_customer(&self, id: CustomerId) -> ClienteleResult<CustomerResponse> {
        debug!("Getting customer: {}", id);

        let customer = self
            .customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClienteleError::not_found("Customer", id))?;

        Ok(CustomerResponse::from(customer))
    }

    async fn add_customer(&self, request: CustomerRegistrationRequest) -> ClienteleResult<()> {
        debug!("Registering customer: {}", request.email);

        request.validate_request()?;

        let email = Email::new(&request.email)
            .map_err(|e| ClienteleError::Validation(e.to_string()))?;

        if self.customer_repository.exists_by_email(email.as_str()).await? {
            return Err(ClienteleError::duplicate_email(email.as_str()));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let customer = NewCustomer::new(
            request.name,
            email,
            password_hash,
            request.age,
            request.gender,
        );

        self.customer_repository.insert(&customer).await?;

        info!("Customer registered: {}", customer.email);
        Ok(())
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        request: CustomerUpdateRequest,
    ) -> ClienteleResult<()> {
        debug!("Updating customer: {}", id);

        request.validate_request()?;

        let mut customer = self
            .customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClienteleError::not_found("Customer", id))?;

        let mut changed = false;

        if let Some(name) = request.name {
            if name != customer.name {
                customer.name = name;
                changed = true;
            }
        }

        if let Some(age) = request.age {
            if age != customer.age {
                customer.age = age;
                changed = true;
            }
        }

        if let Some(email) = request.email {
            let email =
                Email::new(&email).map_err(|e| ClienteleError::Validation(e.to_string()))?;
            if email != customer.email {
                if self.customer_repository.exists_by_email(email.as_str()).await? {
                    return Err(ClienteleError::duplicate_email(email.as_str()));
                }
                customer.email = email;
                changed = true;
            }
        }

        if !changed {
            return Err(ClienteleError::NoChanges);
        }

        self.customer_repository.update(&customer).await?;

        info!("Customer updated: {}", id);
        Ok(())
    }

    async fn delete_customer(&self, id: CustomerId) -> ClienteleResult<()> {
        debug!("Deleting customer: {}", id);

        if !self.customer_repository.exists_by_id(id).await? {
            return Err(ClienteleError::not_found("Customer", id));
        }

        self.customer_repository.delete(id).await?;

        info!("Customer deleted: {}", id);
        Ok(())
    }
}

impl<R: CustomerRepository> std::fmt::Debug for CustomerServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerServiceImpl").finish_non_exhaustive()
    }
}
