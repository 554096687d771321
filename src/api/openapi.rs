//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, headers, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookly",
        version = "1.0.0",
        description = "A REST API for a book collection"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::replace_book,
        books::partial_update_book,
        books::delete_book,
        // Headers
        headers::get_headers,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPatch,
            crate::models::book::BookRecord,
            headers::HeadersResponse,
            health::HealthResponse,
            health::ReadinessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book collection"),
        (name = "headers", description = "Request header echo")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
