// src/application/services/auth_context.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedAccount,
        error::ApplicationResult,
        ports::TokenManagerPort,
    },
    domain::account::AccountRepository,
};

/// Turns a raw bearer token into the identity of the request.
pub struct AuthContext {
    token_manager: Arc<TokenManagerPort>,
    account_repo: Arc<dyn AccountRepository>,
}

impl AuthContext {
    pub fn new(
        token_manager: Arc<TokenManagerPort>,
        account_repo: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            token_manager,
            account_repo,
        }
    }

    /// `None` in, `None` out. A token that fails verification is an error;
    /// a valid token naming an account that no longer exists yields no
    /// identity.
    pub async fn resolve(
        &self,
        token: Option<&str>,
    ) -> ApplicationResult<Option<AuthenticatedAccount>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let account_id = self.token_manager.verify(token).await?;
        let account = self.account_repo.find_by_id(account_id).await?;
        if account.is_none() {
            tracing::debug!(account_id = %account_id, "token names a missing account");
        }
        Ok(account.as_ref().map(AuthenticatedAccount::from))
    }
}
