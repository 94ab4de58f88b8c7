//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use clientele_core::{ErrorResponse, FieldError, Gender};
use clientele_service::{CustomerRegistrationRequest, CustomerResponse, CustomerUpdateRequest};
use utoipa::OpenApi;

use crate::controllers::health_controller::HealthResponse;

/// OpenAPI documentation for the Clientele API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clientele API",
        version = "1.0.0",
        description = "RESTful API for customer management",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Customer endpoints
        crate::controllers::customer_controller::list_customers,
        crate::controllers::customer_controller::register_customer,
        crate::controllers::customer_controller::get_customer,
        crate::controllers::customer_controller::update_customer,
        crate::controllers::customer_controller::delete_customer,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            Gender,
            ErrorResponse,
            FieldError,
            // Customer DTOs
            CustomerRegistrationRequest,
            CustomerUpdateRequest,
            CustomerResponse,
            // Health
            HealthResponse,
        )
    ),
    tags(
        (name = "customers", description = "Customer management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
