pub mod entity;
pub mod repository;
pub mod specifications;
pub mod statistics;
pub mod validation;
pub mod value_objects;

pub use entity::{NewPost, Post, PostContent, PostReplacement};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use specifications::{Decision, OwnershipPolicy};
pub use validation::{LikesOnMissing, PostDraft};
pub use value_objects::{AuthorName, Likes, PostId, PostTitle, PostUrl};
