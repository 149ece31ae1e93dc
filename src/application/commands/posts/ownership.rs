use crate::application::{
    dto::AuthenticatedAccount,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::post::{Decision, OwnershipPolicy, Post};

pub(super) fn ensure_owner(
    actor: Option<&AuthenticatedAccount>,
    post: &Post,
    action: &str,
) -> ApplicationResult<()> {
    match OwnershipPolicy::authorize(actor.map(|actor| actor.id), post) {
        Decision::Permit => Ok(()),
        Decision::Deny => Err(ApplicationError::forbidden(format!(
            "only the creator of a post may {action} it"
        ))),
    }
}
