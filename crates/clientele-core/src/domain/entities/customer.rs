//! Customer entity.

use super::super::value_objects::{Email, Gender};
use crate::{CustomerId, Entity};
use serde::{Deserialize, Serialize};

/// Customer entity.
///
/// The id is assigned by the store on insert and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer.
    pub id: CustomerId,

    /// Customer's display name.
    pub name: String,

    /// Customer's email address, unique across the store.
    pub email: Email,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Customer's age in years.
    pub age: i32,

    /// Customer's gender.
    pub gender: Gender,
}

impl Customer {
    /// Creates a customer from already-persisted data.
    #[must_use]
    pub fn new(
        id: CustomerId,
        name: String,
        email: Email,
        password_hash: String,
        age: i32,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            age,
            gender,
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}

/// A customer about to be inserted.
///
/// Carries no id field, so a caller-supplied id is unrepresentable; the
/// store assigns one during insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    /// Customer's display name.
    pub name: String,

    /// Customer's email address.
    pub email: Email,

    /// Hashed password.
    pub password_hash: String,

    /// Customer's age in years.
    pub age: i32,

    /// Customer's gender.
    pub gender: Gender,
}

impl NewCustomer {
    /// Creates a new customer for insertion.
    #[must_use]
    pub fn new(name: String, email: Email, password_hash: String, age: i32, gender: Gender) -> Self {
        Self {
            name,
            email,
            password_hash,
            age,
            gender,
        }
    }

    /// Materializes the customer with its store-assigned id.
    #[must_use]
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            age: self.age,
            gender: self.gender,
        }
    }
}
