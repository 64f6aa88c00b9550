use serde::Serialize;
use utoipa::{
    openapi::{Info, InfoBuilder},
    ToSchema,
};

/// Static metadata describing the service for documentation tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiDescriptor {
    #[schema(value_type = String)]
    pub title: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

pub static API_DESCRIPTOR: ApiDescriptor = ApiDescriptor {
    title: "API Banque",
    description: "Documentation de l’API de gestion des comptes bancaires",
    version: "1.0.0",
};

/// Returns the process-wide descriptor
pub fn api_descriptor() -> &'static ApiDescriptor {
    &API_DESCRIPTOR
}

impl From<&ApiDescriptor> for Info {
    fn from(descriptor: &ApiDescriptor) -> Self {
        InfoBuilder::new()
            .title(descriptor.title)
            .description(Some(descriptor.description))
            .version(descriptor.version)
            .build()
    }
}
