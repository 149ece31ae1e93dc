use super::AccountCommandService;
use crate::{
    application::{
        dto::LoginResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Account, Username},
};

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl AccountCommandService {
    /// Exchanges a username and password for a bearer token. Unknown
    /// usernames and wrong passwords fail the same way.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResultDto> {
        let account = self
            .find_and_verify(&command.username, &command.password)
            .await?;

        let token = self.token_manager.issue(account.id).await?;

        Ok(LoginResultDto {
            token,
            username: account.username.into(),
            name: account.name,
        })
    }

    async fn find_and_verify(&self, username: &str, password: &str) -> ApplicationResult<Account> {
        let found = match Username::new(username) {
            Ok(username) => self.account_repo.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(account) = found else {
            self.verify_against_decoy(password).await?;
            tracing::debug!("login rejected: unknown username");
            return Err(ApplicationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, account.password_hash.as_str())
            .await?
        {
            tracing::debug!(account_id = %account.id, "login rejected: password mismatch");
            return Err(ApplicationError::InvalidCredentials);
        }

        Ok(account)
    }

    async fn verify_against_decoy(&self, password: &str) -> ApplicationResult<()> {
        let digest = self
            .decoy_digest
            .get_or_try_init(|| self.password_hasher.hash(DECOY_PASSWORD))
            .await?;
        self.password_hasher.verify(password, digest).await?;
        Ok(())
    }
}
