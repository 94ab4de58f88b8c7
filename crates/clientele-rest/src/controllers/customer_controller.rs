//! Customer management controller.

use crate::{
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use clientele_core::{ClienteleError, CustomerId};
use clientele_service::{CustomerRegistrationRequest, CustomerResponse, CustomerUpdateRequest};
use tracing::debug;

/// Creates the customer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(register_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// List all customers.
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "List of all customers", body = [CustomerResponse])
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Vec<CustomerResponse>> {
    debug!("List customers request");

    let response = state.customer_service.get_all_customers().await?;
    ok(response)
}

/// Register a new customer.
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CustomerRegistrationRequest,
    responses(
        (status = 201, description = "Customer registered"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerRegistrationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    debug!("Register customer request: {}", request.email);

    state.customer_service.add_customer(request).await?;
    Ok(created(()))
}

/// Get a customer by ID.
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CustomerResponse> {
    debug!("Get customer request: {}", id);

    let customer_id = parse_customer_id(&id)?;
    let response = state.customer_service.get_customer(customer_id).await?;
    ok(response)
}

/// Apply a partial update to a customer.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    request_body = CustomerUpdateRequest,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "No data changes found"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CustomerUpdateRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update customer request: {}", id);

    let customer_id = parse_customer_id(&id)?;
    state
        .customer_service
        .update_customer(customer_id, request)
        .await?;
    Ok(no_content())
}

/// Delete a customer.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete customer request: {}", id);

    let customer_id = parse_customer_id(&id)?;
    state.customer_service.delete_customer(customer_id).await?;
    Ok(no_content())
}

/// Helper to parse customer ID from path parameter.
fn parse_customer_id(id: &str) -> Result<CustomerId, AppError> {
    CustomerId::parse(id)
        .map_err(|_| AppError(ClienteleError::Validation(format!("Invalid customer ID: {}", id))))
}
