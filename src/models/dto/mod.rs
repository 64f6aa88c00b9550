pub mod account;
pub mod message;
pub use account::*;
pub use message::Message;

use utoipa::OpenApi;

use super::{api_descriptor::ApiDescriptor, AccountType};

#[derive(OpenApi)]
#[openapi(components(schemas(
    Message,
    AccountPayload,
    AccountResponse,
    AccountType,
    ApiDescriptor,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
