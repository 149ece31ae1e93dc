// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthTokenDto};
use crate::domain::account::AccountId;
use async_trait::async_trait;

/// Salted one-way password digests.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Ok(false)` on a mismatch. Errors are reserved for digests that cannot
    /// be parsed or for the hashing task failing.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

/// Signed identity tokens carrying an account id and nothing else.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, account_id: AccountId) -> ApplicationResult<AuthTokenDto>;
    /// Fails with `ApplicationError::InvalidToken` for forged, malformed or
    /// expired tokens and for tokens lacking the account claim.
    async fn verify(&self, token: &str) -> ApplicationResult<AccountId>;
}
