// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, ReplacePostCommand},
    dto::{PostDto, PostInfoDto, PostStatisticsDto},
    queries::posts::GetPostQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

/// Write payload shared by create and replace. Any owner field a client
/// sends is ignored.
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    JsonBody(payload): JsonBody<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = CreatePostCommand {
        title: payload.title,
        author: payload.author,
        url: payload.url,
        likes: payload.likes,
    };

    state
        .services
        .post_commands
        .create_post(&actor, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(GetPostQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn replace_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = ReplacePostCommand {
        id,
        title: payload.title,
        author: payload.author,
        url: payload.url,
        likes: payload.likes,
    };

    state
        .services
        .post_commands
        .replace_post(actor.0.as_ref(), command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(actor.0.as_ref(), DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn post_statistics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<PostStatisticsDto>> {
    state
        .services
        .post_queries
        .post_statistics()
        .await
        .into_http()
        .map(Json)
}

pub async fn post_info(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let info = state.services.post_queries.post_info().await.into_http()?;
    Ok(Html(render_info(&info)))
}

fn render_info(info: &PostInfoDto) -> String {
    format!(
        "<p>Bloglist has info for {} blogs</p>\n<p>{}</p>\n",
        info.count,
        info.generated_at.to_rfc2822()
    )
}
