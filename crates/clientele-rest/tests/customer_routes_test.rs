//! End-to-end route tests against an in-memory store.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use clientele_config::ServerConfig;
use clientele_core::{ClienteleError, ClienteleResult, StoreHealth};
use clientele_repository::MemoryCustomerRepository;
use clientele_rest::{create_router, AppState};
use clientele_security::PasswordHasher;
use clientele_service::{CustomerService, CustomerServiceImpl};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_app() -> Router {
    let repository = Arc::new(MemoryCustomerRepository::new());
    let hasher = Arc::new(PasswordHasher::with_cost(1));
    let service: Arc<dyn CustomerService> =
        Arc::new(CustomerServiceImpl::new(repository.clone(), hasher));

    create_router(
        AppState::new(service, repository),
        &ServerConfig::default(),
    )
}

/// Store stand-in whose readiness probe always fails.
struct UnreachableStore;

#[async_trait]
impl StoreHealth for UnreachableStore {
    async fn check(&self) -> ClienteleResult<()> {
        Err(ClienteleError::Database("connection refused".to_string()))
    }
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn registration_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": "password123",
        "age": 21,
        "gender": "MALE"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reflects_store_health() {
    let app = test_app();

    let response = app.oneshot(get_request("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_fails_when_store_is_unreachable() {
    let repository = Arc::new(MemoryCustomerRepository::new());
    let hasher = Arc::new(PasswordHasher::with_cost(1));
    let service: Arc<dyn CustomerService> =
        Arc::new(CustomerServiceImpl::new(repository, hasher));
    let app = create_router(
        AppState::new(service, Arc::new(UnreachableStore)),
        &ServerConfig::default(),
    );

    let response = app.clone().oneshot(get_request("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Liveness is independent of the store
    let response = app.oneshot(get_request("/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_customer_returns_created() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Alex", "alex@gmail.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_duplicate_email_returns_conflict() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Alex", "alex@gmail.com"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Impostor", "alex@gmail.com"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_register_invalid_payload_returns_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            json!({
                "name": "Alex",
                "email": "not-an-email",
                "password": "password123",
                "age": 21,
                "gender": "MALE"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_customers_never_exposes_password() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Alex", "alex@gmail.com"),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/v1/customers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("password"));

    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Alex");
    assert_eq!(body["data"][0]["gender"], "MALE");
}

#[tokio::test]
async fn test_get_missing_customer_returns_not_found() {
    let app = test_app();

    let response = app.oneshot(get_request("/api/v1/customers/0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_customer_with_garbage_id_returns_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(get_request("/api/v1/customers/not-a-number"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_customer_flow() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Alex", "alex@gmail.com"),
        ))
        .await
        .unwrap();

    // The in-memory store assigns id 1 to the first customer
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/customers/1",
            json!({ "name": "Alexa", "email": "alexa@gmail.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request("/api/v1/customers/1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Alexa");
    assert_eq!(body["data"]["email"], "alexa@gmail.com");
    assert_eq!(body["data"]["age"], 21);
}

#[tokio::test]
async fn test_update_without_changes_returns_bad_request() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Alex", "alex@gmail.com"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/customers/1",
            json!({ "name": "Alex" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NO_CHANGES");
}

#[tokio::test]
async fn test_delete_customer_then_delete_again() {
    let app = test_app();

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/customers",
            registration_body("Alex", "alex@gmail.com"),
        ))
        .await
        .unwrap();

    let delete = |uri: &str| {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete("/api/v1/customers/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete("/api/v1/customers/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let app = test_app();

    let response = app
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/customers"].is_object());
    assert!(body["paths"]["/customers/{id}"].is_object());
}
