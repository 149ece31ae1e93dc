use super::AccountQueryService;
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::AccountId,
};

pub struct GetAccountQuery {
    pub id: String,
}

impl AccountQueryService {
    pub async fn get_account(&self, query: GetAccountQuery) -> ApplicationResult<AccountDto> {
        let id: AccountId = query.id.parse()?;
        let account = self
            .account_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("account {id} does not exist")))?;
        let posts = self.post_read.list_by_owner(id).await?;
        Ok(AccountDto::from_parts(account, posts))
    }
}
