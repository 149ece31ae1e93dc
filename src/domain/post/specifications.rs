use crate::domain::account::AccountId;
use crate::domain::post::entity::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permit,
    Deny,
}

impl Decision {
    pub fn is_permitted(self) -> bool {
        matches!(self, Decision::Permit)
    }
}

/// Gates mutating operations on a post: only its owner may perform them.
pub struct OwnershipPolicy;

impl OwnershipPolicy {
    pub fn authorize(requester: Option<AccountId>, post: &Post) -> Decision {
        match requester {
            Some(id) if post.is_owned_by(id) => Decision::Permit,
            _ => Decision::Deny,
        }
    }
}
