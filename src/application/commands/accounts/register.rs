use super::AccountCommandService;
use crate::{
    application::{dto::AccountDto, error::ApplicationResult},
    domain::{
        account::{NewAccount, PasswordHash, RegistrationDraft},
        errors::DomainError,
    },
};

pub struct RegisterAccountCommand {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterAccountCommand) -> ApplicationResult<AccountDto> {
        let draft = RegistrationDraft {
            username: command.username.as_deref(),
            password: command.password.as_deref(),
        };
        let valid = draft.validate()?;

        if self
            .account_repo
            .find_by_username(&valid.username)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("username must be unique".into()).into());
        }

        let hashed = self.password_hasher.hash(valid.password).await?;
        let new_account = NewAccount::new(valid.username, command.name, PasswordHash::new(hashed)?);
        let account = self.account_repo.insert(new_account).await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "account registered"
        );
        Ok(AccountDto::from_parts(account, Vec::new()))
    }
}
