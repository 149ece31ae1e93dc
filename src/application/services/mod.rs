// src/application/services/mod.rs
mod auth_context;

use std::sync::Arc;

pub use auth_context::AuthContext;

use crate::{
    application::{
        commands::{accounts::AccountCommandService, posts::PostCommandService},
        ports::{ClockPort, PasswordHasherPort, TokenManagerPort},
        queries::{accounts::AccountQueryService, posts::PostQueryService},
    },
    domain::{
        account::AccountRepository,
        post::{PostReadRepository, PostWriteRepository},
    },
};

/// Behavior switches that are not part of any single service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceOptions {
    /// When set, only the owner of a post may replace it.
    pub owner_gated_updates: bool,
}

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    pub post_queries: Arc<PostQueryService>,
    pub auth: Arc<AuthContext>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
        options: ServiceOptions,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&account_repo),
            options.owner_gated_updates,
        ));

        let account_queries = Arc::new(AccountQueryService::new(
            Arc::clone(&account_repo),
            Arc::clone(&post_read_repo),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&account_repo),
            clock,
        ));

        let auth = Arc::new(AuthContext::new(token_manager, account_repo));

        Self {
            account_commands,
            post_commands,
            account_queries,
            post_queries,
            auth,
        }
    }
}
