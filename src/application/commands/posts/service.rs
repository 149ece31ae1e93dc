// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        account::AccountRepository,
        post::{Post, PostId, PostReadRepository, PostWriteRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) owner_gated_updates: bool,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        account_repo: Arc<dyn AccountRepository>,
        owner_gated_updates: bool,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            account_repo,
            owner_gated_updates,
        }
    }

    pub(super) async fn find_existing(&self, id: PostId) -> ApplicationResult<Post> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post {id} does not exist")))
    }
}
