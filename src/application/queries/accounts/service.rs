use std::sync::Arc;

use crate::domain::{account::AccountRepository, post::PostReadRepository};

pub struct AccountQueryService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) post_read: Arc<dyn PostReadRepository>,
}

impl AccountQueryService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        post_read: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            account_repo,
            post_read,
        }
    }
}
