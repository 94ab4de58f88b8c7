//! MySQL customer repository implementation.

use crate::{traits::CustomerRepository, DatabasePool};
use async_trait::async_trait;
use clientele_core::{ClienteleError, ClienteleResult};
use clientele_core::{Customer, CustomerId, Email, Gender, NewCustomer};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL customer repository implementation.
#[derive(Clone)]
pub struct MySqlCustomerRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlCustomerRepository {
    /// Creates a new MySQL customer repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a customer.
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    age: i32,
    gender: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = ClienteleError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let gender: Gender = row
            .gender
            .parse()
            .map_err(|e| ClienteleError::Internal(format!("Invalid gender in database: {}", e)))?;

        Ok(Customer {
            id: CustomerId::new(row.id),
            name: row.name,
            email: Email::new_unchecked(row.email),
            password_hash: row.password_hash,
            age: row.age,
            gender,
        })
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_all(&self) -> ClienteleResult<Vec<Customer>> {
        debug!("Finding all customers");

        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, password_hash, age, gender
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn find_by_id(&self, id: CustomerId) -> ClienteleResult<Option<Customer>> {
        debug!("Finding customer by id: {}", id);

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, password_hash, age, gender
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Customer::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> ClienteleResult<Option<Customer>> {
        debug!("Finding customer by email: {}", email);

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, password_hash, age, gender
            FROM customers
            WHERE LOWER(email) = LOWER(?)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Customer::try_from).transpose()
    }

    async fn exists_by_id(&self, id: CustomerId) -> ClienteleResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM customers WHERE id = ? LIMIT 1")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> ClienteleResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM customers WHERE LOWER(email) = LOWER(?) LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn insert(&self, customer: &NewCustomer) -> ClienteleResult<()> {
        debug!("Inserting customer: {}", customer.email);

        // The UNIQUE key on email backs the service-level duplicate check;
        // a lost race surfaces as DuplicateEmail via From<sqlx::Error>.
        sqlx::query(
            r#"
            INSERT INTO customers (name, email, password_hash, age, gender)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.name)
        .bind(customer.email.as_str())
        .bind(&customer.password_hash)
        .bind(customer.age)
        .bind(customer.gender.as_str())
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> ClienteleResult<()> {
        debug!("Updating customer: {}", customer.id);

        sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, email = ?, password_hash = ?, age = ?, gender = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.name)
        .bind(customer.email.as_str())
        .bind(&customer.password_hash)
        .bind(customer.age)
        .bind(customer.gender.as_str())
        .bind(customer.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> ClienteleResult<()> {
        debug!("Deleting customer: {}", id);

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlCustomerRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCustomerRepository").finish_non_exhaustive()
    }
}
