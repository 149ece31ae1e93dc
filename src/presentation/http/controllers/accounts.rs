// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::accounts::RegisterAccountCommand, dto::AccountDto,
    queries::accounts::GetAccountQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<Json<AccountDto>> {
    let command = RegisterAccountCommand {
        username: payload.username,
        name: payload.name,
        password: payload.password,
    };

    state
        .services
        .account_commands
        .register(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_accounts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AccountDto>>> {
    state
        .services
        .account_queries
        .list_accounts()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_account(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AccountDto>> {
    state
        .services
        .account_queries
        .get_account(GetAccountQuery { id })
        .await
        .into_http()
        .map(Json)
}
