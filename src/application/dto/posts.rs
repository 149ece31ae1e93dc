use crate::domain::account::Account;
use crate::domain::post::{
    Post,
    statistics::{AuthorLikeCount, AuthorPostCount},
};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::accounts::PostSummaryDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerSummary {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
}

impl From<&Account> for OwnerSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.into(),
            username: account.username.to_string(),
            name: account.name.clone(),
        }
    }
}

/// Owner reference as shown to clients. An owner that can no longer be
/// resolved serializes as the string `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerRef {
    Account(OwnerSummary),
    Unknown,
}

impl OwnerRef {
    pub fn resolve(account: Option<&Account>) -> Self {
        account.map_or(OwnerRef::Unknown, |account| {
            OwnerRef::Account(OwnerSummary::from(account))
        })
    }
}

impl Serialize for OwnerRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OwnerRef::Account(summary) => summary.serialize(serializer),
            OwnerRef::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: OwnerRef,
}

impl PostDto {
    pub fn from_parts(post: Post, owner: OwnerRef) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            author: post.author.into(),
            url: post.url.into(),
            likes: post.likes.into(),
            user: owner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorPostsDto {
    pub author: String,
    pub posts: u64,
}

impl From<AuthorPostCount> for AuthorPostsDto {
    fn from(value: AuthorPostCount) -> Self {
        Self {
            author: value.author,
            posts: value.posts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikesDto {
    pub author: String,
    pub likes: i64,
}

impl From<AuthorLikeCount> for AuthorLikesDto {
    fn from(value: AuthorLikeCount) -> Self {
        Self {
            author: value.author,
            likes: value.likes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostStatisticsDto {
    pub total_likes: i64,
    pub favorite_post: Option<PostSummaryDto>,
    pub most_posts: Option<AuthorPostsDto>,
    pub most_likes: Option<AuthorLikesDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostInfoDto {
    pub count: u64,
    pub generated_at: DateTime<Utc>,
}
