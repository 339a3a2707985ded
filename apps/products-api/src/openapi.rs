//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::utility;

/// Combined OpenAPI documentation for the Product Management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Management API",
        version = "0.1.0",
        description = "REST API to perform CRUD operations on products"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(utility::welcome, utility::docs, utility::info),
    nest(
        (path = "/api/products", api = domain_products::handlers::ApiDoc)
    ),
    tags(
        (name = utility::TAG, description = "Basic welcome, info and docs endpoints")
    )
)]
pub struct ApiDoc;
