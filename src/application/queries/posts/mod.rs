// src/application/queries/posts/mod.rs
mod get_by_id;
mod list;
pub(crate) mod owners;
mod service;
mod statistics;

pub use get_by_id::GetPostQuery;
pub use service::PostQueryService;
