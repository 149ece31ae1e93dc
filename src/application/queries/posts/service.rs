use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{account::AccountRepository, post::PostReadRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        account_repo: Arc<dyn AccountRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            account_repo,
            clock,
        }
    }
}
