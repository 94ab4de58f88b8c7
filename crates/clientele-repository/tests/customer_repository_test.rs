//! Integration tests for the MySQL customer repository.
//!
//! These tests run against a real MySQL instance in a container and are
//! ignored by default; run them with `cargo test -- --ignored` where
//! Docker is available.

mod common;

use clientele_core::{CustomerId, Email, Gender, NewCustomer};
use clientele_repository::{CustomerRepository, MySqlCustomerRepository};
use common::TestDatabase;
use uuid::Uuid;

fn unique_email() -> String {
    format!("{}@integration.test", Uuid::new_v4())
}

fn new_customer(name: &str, email: &str, age: i32, gender: Gender) -> NewCustomer {
    NewCustomer::new(
        name.to_string(),
        Email::new_unchecked(email),
        "hashed_password".to_string(),
        age,
        gender,
    )
}

/// Inserts a customer and returns the store-assigned entity.
async fn insert_and_fetch(
    repo: &MySqlCustomerRepository,
    customer: &NewCustomer,
) -> clientele_core::Customer {
    repo.insert(customer).await.unwrap();
    repo.find_by_email(customer.email.as_str())
        .await
        .unwrap()
        .expect("inserted customer should be findable by email")
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    let email = unique_email();
    let inserted = insert_and_fetch(&repo, &new_customer("Alex", &email, 21, Gender::Male)).await;

    let found = repo.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Alex");
    assert_eq!(found.email.as_str(), email);
    assert_eq!(found.age, 21);
    assert_eq!(found.gender, Gender::Male);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_returns_none_for_unassigned_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    // Id 0 is never assigned by AUTO_INCREMENT
    assert!(repo.find_by_id(CustomerId::new(0)).await.unwrap().is_none());
    assert!(!repo.exists_by_id(CustomerId::new(0)).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_exists_by_email_is_case_insensitive() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    let email = unique_email();
    repo.insert(&new_customer("Jamila", &email, 19, Gender::Female))
        .await
        .unwrap();

    assert!(repo.exists_by_email(&email).await.unwrap());
    assert!(repo.exists_by_email(&email.to_uppercase()).await.unwrap());
    assert!(!repo.exists_by_email(&unique_email()).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_email_key_rejects_duplicate_insert() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    let email = unique_email();
    repo.insert(&new_customer("Alex", &email, 21, Gender::Male))
        .await
        .unwrap();

    let err = repo
        .insert(&new_customer("Impostor", &email, 30, Gender::Male))
        .await
        .unwrap_err();
    assert!(matches!(err, clientele_core::ClienteleError::DuplicateEmail(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_replaces_row() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    let email = unique_email();
    let mut customer = insert_and_fetch(&repo, &new_customer("Alex", &email, 21, Gender::Male)).await;

    let new_email = unique_email();
    customer.name = "Alexa".to_string();
    customer.email = Email::new_unchecked(&new_email);
    repo.update(&customer).await.unwrap();

    let updated = repo.find_by_id(customer.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Alexa");
    assert_eq!(updated.email.as_str(), new_email);
    assert_eq!(updated.age, 21);
    assert!(repo.find_by_email(&email).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_removes_row_and_is_noop_when_absent() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    let email = unique_email();
    let customer = insert_and_fetch(&repo, &new_customer("Alex", &email, 21, Gender::Male)).await;

    repo.delete(customer.id).await.unwrap();
    assert!(!repo.exists_by_id(customer.id).await.unwrap());

    // Second delete of the same id is a silent no-op at the store level
    repo.delete(customer.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_returns_inserted_customers() {
    let db = TestDatabase::new().await;
    let repo = MySqlCustomerRepository::new(db.pool());

    let email_a = unique_email();
    let email_b = unique_email();
    repo.insert(&new_customer("Alex", &email_a, 21, Gender::Male))
        .await
        .unwrap();
    repo.insert(&new_customer("Jamila", &email_b, 19, Gender::Female))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|c| c.email.as_str() == email_a));
    assert!(all.iter().any(|c| c.email.as_str() == email_b));
}
