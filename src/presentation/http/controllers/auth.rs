// src/presentation/http/controllers/auth.rs
use crate::application::{commands::accounts::LoginCommand, dto::LoginResultDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

/// Missing fields deserialize as empty strings and fail as bad credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<LoginResultDto>> {
    let command = LoginCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .account_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}
