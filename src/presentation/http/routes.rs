// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{accounts, auth, posts},
    error::HttpError,
    middleware::resolve_identity,
    state::HttpState,
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
    routing::post,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub fn build_router(state: HttpState, allowed_origins: &[HeaderValue]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins.to_vec())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/login", post(auth::login))
        .route(
            "/api/users",
            get(accounts::list_accounts).post(accounts::register),
        )
        .route("/api/users/{id}", get(accounts::get_account))
        .route("/api/blogs", get(posts::list_posts).post(posts::create_post))
        .route("/api/blogs/info", get(posts::post_info))
        .route("/api/blogs/stats", get(posts::post_statistics))
        .route(
            "/api/blogs/{id}",
            get(posts::get_post)
                .put(posts::replace_post)
                .delete(posts::delete_post),
        )
        .route_layer(middleware::from_fn(resolve_identity))
        .fallback(unknown_endpoint)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

async fn unknown_endpoint() -> HttpError {
    HttpError::unknown_endpoint()
}
