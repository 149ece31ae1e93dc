use crate::domain::account::AccountId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostReplacement};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Fails with `DomainError::NotFound` when no post has the id.
    async fn replace(&self, replacement: PostReplacement) -> DomainResult<Post>;
    /// Fails with `DomainError::NotFound` when no post has the id.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn list(&self) -> DomainResult<Vec<Post>>;
    async fn list_by_owner(&self, owner_id: AccountId) -> DomainResult<Vec<Post>>;
    async fn count(&self) -> DomainResult<u64>;
}
