use crate::domain::account::{
    entity::{Account, NewAccount},
    value_objects::{AccountId, Username},
};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

/// Durable store of accounts. Implementations enforce username uniqueness
/// under their configured `UsernameMatching` and report a duplicate as
/// `DomainError::Conflict`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>>;

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    async fn list(&self) -> DomainResult<Vec<Account>>;

    /// Appends to the owned-post index in a single atomic write.
    async fn append_owned_post(&self, id: AccountId, post_id: PostId) -> DomainResult<Account>;
}
