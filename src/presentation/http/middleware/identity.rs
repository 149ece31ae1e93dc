// src/presentation/http/middleware/identity.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::{error::HttpError, extractors::RequestIdentity, state::HttpState},
};
use axum::{
    Extension,
    extract::Request,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

const BEARER_PREFIX: &str = "bearer ";

/// Resolves the bearer credential of every request before routing reaches a
/// handler. A missing header yields no identity; a malformed or unverifiable
/// one ends the request with `invalid_token`.
pub async fn resolve_identity(
    Extension(state): Extension<HttpState>,
    mut request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let token = bearer_token(request.headers())?;
    let identity = state.services.auth.resolve(token.as_deref()).await?;

    request.extensions_mut().insert(RequestIdentity(identity));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<Option<String>, ApplicationError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| ApplicationError::invalid_token("authorization header is not valid text"))?;

    let token = value
        .get(..BEARER_PREFIX.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
        .map(|_| value[BEARER_PREFIX.len()..].trim())
        .ok_or_else(|| ApplicationError::invalid_token("expected a bearer token"))?;

    if token.is_empty() {
        return Err(ApplicationError::invalid_token("bearer token is empty"));
    }
    Ok(Some(token.to_owned()))
}
