// src/application/queries/posts/owners.rs
//! Owner lookup for post responses. A failed or empty lookup degrades to
//! `OwnerRef::Unknown` rather than failing the read.
use std::collections::HashMap;

use crate::{
    application::dto::{OwnerRef, OwnerSummary},
    domain::account::{AccountId, AccountRepository},
};

pub(crate) async fn resolve_owner(repo: &dyn AccountRepository, owner_id: AccountId) -> OwnerRef {
    match repo.find_by_id(owner_id).await {
        Ok(account) => OwnerRef::resolve(account.as_ref()),
        Err(err) => {
            tracing::warn!(owner_id = %owner_id, error = %err, "owner lookup failed");
            OwnerRef::Unknown
        }
    }
}

/// Loads every account once and indexes the public summaries by id.
pub(crate) async fn owner_index(repo: &dyn AccountRepository) -> HashMap<AccountId, OwnerSummary> {
    match repo.list().await {
        Ok(accounts) => accounts
            .iter()
            .map(|account| (account.id, OwnerSummary::from(account)))
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "owner listing failed; owners reported as unknown");
            HashMap::new()
        }
    }
}

pub(crate) fn lookup(index: &HashMap<AccountId, OwnerSummary>, owner_id: AccountId) -> OwnerRef {
    index
        .get(&owner_id)
        .cloned()
        .map_or(OwnerRef::Unknown, OwnerRef::Account)
}
