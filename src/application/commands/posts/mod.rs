// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod ownership;
mod replace;
mod service;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use replace::ReplacePostCommand;
pub use service::PostCommandService;
