// src/application/queries/accounts/list.rs
use std::collections::HashMap;

use super::AccountQueryService;
use crate::{
    application::{dto::AccountDto, error::ApplicationResult},
    domain::{account::AccountId, post::Post},
};

impl AccountQueryService {
    /// Every account with its posts attached. Posts are grouped by their
    /// owner reference, so a post whose owner is gone simply appears nowhere.
    pub async fn list_accounts(&self) -> ApplicationResult<Vec<AccountDto>> {
        let accounts = self.account_repo.list().await?;
        let mut by_owner: HashMap<AccountId, Vec<Post>> = HashMap::new();
        for post in self.post_read.list().await? {
            by_owner.entry(post.owner_id).or_default().push(post);
        }

        Ok(accounts
            .into_iter()
            .map(|account| {
                let posts = by_owner.remove(&account.id).unwrap_or_default();
                AccountDto::from_parts(account, posts)
            })
            .collect())
    }
}
