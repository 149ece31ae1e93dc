use crate::domain::account::Account;
use crate::domain::post::Post;
use serde::{Deserialize, Serialize};

/// Public projection of an account. The password digest never leaves the
/// domain layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub posts: Vec<PostSummaryDto>,
}

impl AccountDto {
    /// `posts` comes from a query on the post store filtered by owner, not
    /// from the account's own index.
    pub fn from_parts(account: Account, posts: Vec<Post>) -> Self {
        Self {
            id: account.id.into(),
            username: account.username.into(),
            name: account.name,
            posts: posts.into_iter().map(PostSummaryDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummaryDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl From<Post> for PostSummaryDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            author: post.author.into(),
            url: post.url.into(),
            likes: post.likes.into(),
        }
    }
}

impl From<&Post> for PostSummaryDto {
    fn from(post: &Post) -> Self {
        Self::from(post.clone())
    }
}
