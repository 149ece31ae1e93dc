// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAccount, error::ApplicationError},
    presentation::http::error::HttpError,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Identity resolved by the identity middleware, stored in request
/// extensions. `None` means the request carried no usable identity.
#[derive(Debug, Clone)]
pub struct RequestIdentity(pub Option<AuthenticatedAccount>);

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAccount);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedAccount>);

fn request_identity(parts: &Parts) -> Result<Option<AuthenticatedAccount>, HttpError> {
    parts
        .extensions
        .get::<RequestIdentity>()
        .map(|identity| identity.0.clone())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "identity middleware not installed",
            ))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        request_identity(parts)?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::invalid_token("token missing or invalid"))
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        request_identity(parts).map(Self)
    }
}

/// `Json` whose rejections use the service's error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
