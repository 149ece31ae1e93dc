// src/infrastructure/repositories/memory.rs
//! Process-local stores used when no database is configured, and by tests.
use crate::domain::account::{
    Account, AccountId, AccountRepository, NewAccount, Username, UsernameMatching,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostReplacement, PostWriteRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Default)]
pub struct InMemoryAccountRepository {
    matching: UsernameMatching,
    table: RwLock<Table<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new(matching: UsernameMatching) -> Self {
        Self {
            matching,
            table: RwLock::default(),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account> {
        // Uniqueness check and insert happen under one write lock.
        let mut table = self.table.write().await;
        let taken = table.rows.values().any(|existing| {
            new_account
                .username
                .matches(existing.username.as_str(), self.matching)
        });
        if taken {
            return Err(DomainError::Conflict("username must be unique".into()));
        }

        let id = AccountId::new(table.allocate_id())?;
        let account = new_account.into_account(id);
        table.rows.insert(id.into(), account.clone());
        Ok(account)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|account| username.matches(account.username.as_str(), self.matching))
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        Ok(self.table.read().await.rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Account>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn append_owned_post(&self, id: AccountId, post_id: PostId) -> DomainResult<Account> {
        let mut table = self.table.write().await;
        let account = table
            .rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound(format!("account {id} does not exist")))?;
        account.append_owned_post(post_id);
        Ok(account.clone())
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_title_free(
    table: &Table<Post>,
    title: &str,
    except: Option<PostId>,
) -> DomainResult<()> {
    let taken = table
        .rows
        .values()
        .any(|post| Some(post.id) != except && post.title.as_str() == title);
    if taken {
        return Err(DomainError::Conflict("title must be unique".into()));
    }
    Ok(())
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut table = self.table.write().await;
        ensure_title_free(&table, post.content.title.as_str(), None)?;
        let id = PostId::new(table.allocate_id())?;
        let stored = Post::from_parts(id, post.content, post.owner_id);
        table.rows.insert(id.into(), stored.clone());
        Ok(stored)
    }

    async fn replace(&self, replacement: PostReplacement) -> DomainResult<Post> {
        let PostReplacement { id, content } = replacement;
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&i64::from(id)) {
            return Err(DomainError::NotFound(format!("post {id} does not exist")));
        }
        ensure_title_free(&table, content.title.as_str(), Some(id))?;

        let post = table
            .rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound(format!("post {id} does not exist")))?;
        post.replace_content(content);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("post {id} does not exist")))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.table.read().await.rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn list_by_owner(&self, owner_id: AccountId) -> DomainResult<Vec<Post>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|post| post.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}
