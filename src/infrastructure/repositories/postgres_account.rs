// src/infrastructure/repositories/postgres_account.rs
use super::map_sqlx;
use crate::domain::account::{
    Account, AccountId, AccountRepository, NewAccount, PasswordHash, Username, UsernameMatching,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const ACCOUNT_COLUMNS: &str = "id, username, name, password_hash, owned_post_ids";

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
    matching: UsernameMatching,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool, matching: UsernameMatching) -> Self {
        Self { pool, matching }
    }

    fn username_predicate(&self) -> &'static str {
        match self.matching {
            UsernameMatching::CaseSensitive => "username = $1",
            UsernameMatching::CaseInsensitive => "lower(username) = lower($1)",
        }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    name: Option<String>,
    password_hash: String,
    owned_post_ids: Vec<i64>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::new(row.id)?,
            username: Username::new(row.username)?,
            name: row.name,
            password_hash: PasswordHash::new(row.password_hash)?,
            owned_post_ids: row
                .owned_post_ids
                .into_iter()
                .map(PostId::new)
                .collect::<DomainResult<_>>()?,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account> {
        let NewAccount {
            username,
            name,
            password_hash,
        } = new_account;

        // The unique constraint covers exact matches; the guarded insert adds
        // the case-folded check when that mode is configured.
        let sql = format!(
            "INSERT INTO accounts (username, name, password_hash)
             SELECT $1, $2, $3
             WHERE NOT EXISTS (SELECT 1 FROM accounts WHERE {})
             RETURNING {ACCOUNT_COLUMNS}",
            self.username_predicate()
        );

        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(username.as_str())
            .bind(name)
            .bind(password_hash.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::Conflict("username must be unique".into()))?;

        Account::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE {} ORDER BY id LIMIT 1",
            self.username_predicate()
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY id");
        sqlx::query_as::<_, AccountRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Account::try_from)
            .collect()
    }

    async fn append_owned_post(&self, id: AccountId, post_id: PostId) -> DomainResult<Account> {
        let sql = format!(
            "UPDATE accounts SET owned_post_ids = array_append(owned_post_ids, $2)
             WHERE id = $1
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(i64::from(id))
            .bind(i64::from(post_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("account {id} does not exist")))?;

        Account::try_from(row)
    }
}
