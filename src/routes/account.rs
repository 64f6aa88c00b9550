use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{AccountPayload, AccountResponse},
        Account, Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    list_accounts_handler,
    create_account_handler,
    get_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "COMPTES";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_accounts_handler).post(create_account_handler))
        .route(
            "/:id",
            get(get_account_handler)
                .put(update_account_handler)
                .delete(delete_account_handler),
        )
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/banque/comptes",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All accounts, ordered by id", body = [AccountResponse]),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, Error> {
    let accounts = state
        .accounts
        .list()
        .await?
        .into_iter()
        .map(AccountResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(accounts))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/banque/comptes",
    tag = ACCOUNT_API_GROUP,
    request_body = AccountPayload,
    responses(
        (status = 201, description = "Account successfully created", body = AccountResponse),
        (status = 400, description = "Invalid account type or date", body = crate::models::dto::Message),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AccountPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), Error> {
    let Json(body) = payload?;
    let new_account = Account::try_from(body)?;
    let account = state.accounts.save(&new_account).await?;
    info!("Created account {:?} ({})", account.id, account.account_type);

    Ok((StatusCode::CREATED, Json(AccountResponse::try_from(account)?)))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/banque/comptes/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found", body = crate::models::dto::Message),
    ),
    params(
        ("id" = i64, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AccountResponse>, Error> {
    let account = state.accounts.get(id).await?;
    Ok(Json(AccountResponse::try_from(account)?))
}

/// Update account handler function. The path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/banque/comptes/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = AccountPayload,
    responses(
        (status = 200, description = "Account successfully updated", body = AccountResponse),
        (status = 400, description = "Invalid account type or date", body = crate::models::dto::Message),
        (status = 404, description = "Account not found", body = crate::models::dto::Message),
    ),
    params(
        ("id" = i64, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<AccountPayload>, JsonRejection>,
) -> Result<Json<AccountResponse>, Error> {
    let Json(body) = payload?;
    let account = Account {
        id: Some(id),
        ..Account::try_from(body)?
    };
    let updated_account = state.accounts.save(&account).await?;
    info!("Updated account {}", id);

    Ok(Json(AccountResponse::try_from(updated_account)?))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/banque/comptes/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found", body = crate::models::dto::Message),
    ),
    params(
        ("id" = i64, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    state.accounts.delete(id).await?;
    info!("Deleted account {}", id);
    Ok(StatusCode::NO_CONTENT)
}
