use crate::models::{api_descriptor, dto, ApiDescriptor};
use axum::Json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(paths(api_info_handler))]
struct Api;

/// Returns the API descriptor used for the documentation `info` block
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "DOCUMENTATION",
    responses(
        (status = OK, description = "API descriptor", body = ApiDescriptor)
    )
)]
pub async fn api_info_handler() -> Json<&'static ApiDescriptor> {
    Json(api_descriptor())
}

/// Assembles the OpenAPI document. Its `info` block always comes from the API descriptor.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut api_docs = Api::openapi();
    api_docs.merge(dto::OpenApiSchemas::openapi());
    api_docs.merge(super::health::HealthApi::openapi());
    api_docs.merge(super::account::AccountsApi::openapi());
    api_docs.info = api_descriptor().into();
    api_docs
}

/// Constructs the route on the API that renders the swagger UI and returns the OpenAPI schema.
pub fn build_documentation() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi())
}
