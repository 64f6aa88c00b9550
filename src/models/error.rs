use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use thiserror::Error as ThisError;

use super::dto::Message;

/// Failures raised by account validation and the storage layer
#[derive(Debug, ThisError)]
pub enum AccountError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Account {0} not found")]
    NotFound(i64),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<sqlx::error::Error> for AccountError {
    fn from(error: sqlx::error::Error) -> Self {
        AccountError::Persistence(error.to_string())
    }
}

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Message>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(Message::new(message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            &format!("Validation error: {}", rejection.body_text()),
        )
    }
}

impl From<AccountError> for Error {
    fn from(error: AccountError) -> Self {
        match &error {
            AccountError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, &error.to_string()),
            AccountError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, &error.to_string()),
            AccountError::Persistence(msg) => {
                tracing::error!("Persistence error: {}", msg);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
