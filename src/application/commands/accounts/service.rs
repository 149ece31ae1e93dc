use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::application::ports::security::{PasswordHasher, TokenManager};
use crate::domain::account::AccountRepository;

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    /// Digest verified against when a login names an unknown account.
    pub(super) decoy_digest: OnceCell<String>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            token_manager,
            decoy_digest: OnceCell::new(),
        }
    }
}
