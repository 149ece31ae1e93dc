// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, PasswordHash, Username};
use crate::domain::post::PostId;

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
    /// Denormalized index of authored posts. `Post::owner_id` is authoritative.
    pub owned_post_ids: Vec<PostId>,
}

impl Account {
    pub fn append_owned_post(&mut self, post_id: PostId) {
        self.owned_post_ids.push(post_id);
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
}

impl NewAccount {
    pub fn new(username: Username, name: Option<String>, password_hash: PasswordHash) -> Self {
        Self {
            username,
            name: name.filter(|value| !value.trim().is_empty()),
            password_hash,
        }
    }

    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            username: self.username,
            name: self.name,
            password_hash: self.password_hash,
            owned_post_ids: Vec::new(),
        }
    }
}
