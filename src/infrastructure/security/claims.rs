// src/infrastructure/security/claims.rs
//! Extraction of the identity claim from a verified token.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::account::AccountId;

pub const ACCOUNT_FACT: &str = "account";

/// Authorizer queries only see the authority block, so facts added by an
/// appended block never reach `parse_account_claim`.
pub const ACCOUNT_CLAIM_QUERY: &str = "claim($id) <- account($id)";

/// Returns the single account id carried by the token. Tokens without the
/// claim, or with more than one, are rejected.
pub fn parse_account_claim(ids: Vec<(i64,)>) -> ApplicationResult<AccountId> {
    let mut ids = ids.into_iter().map(|(id,)| id);

    let raw = ids
        .next()
        .ok_or_else(|| ApplicationError::invalid_token("token carries no account claim"))?;
    if ids.next().is_some() {
        return Err(ApplicationError::invalid_token(
            "token carries more than one account claim",
        ));
    }

    AccountId::new(raw).map_err(|_| ApplicationError::invalid_token("account claim out of range"))
}
