// src/domain/post/entity.rs
use crate::domain::account::AccountId;
use crate::domain::post::value_objects::{AuthorName, Likes, PostId, PostTitle, PostUrl};

/// The replaceable part of a post: everything except identity and owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: PostTitle,
    pub author: AuthorName,
    pub url: PostUrl,
    pub likes: Likes,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub author: AuthorName,
    pub url: PostUrl,
    pub likes: Likes,
    pub owner_id: AccountId,
}

impl Post {
    pub fn from_parts(id: PostId, content: PostContent, owner_id: AccountId) -> Self {
        Self {
            id,
            title: content.title,
            author: content.author,
            url: content.url,
            likes: content.likes,
            owner_id,
        }
    }

    /// Full replacement of the content fields. Identity and owner are kept.
    pub fn replace_content(&mut self, content: PostContent) {
        self.title = content.title;
        self.author = content.author;
        self.url = content.url;
        self.likes = content.likes;
    }

    pub fn is_owned_by(&self, account_id: AccountId) -> bool {
        self.owner_id == account_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: PostContent,
    pub owner_id: AccountId,
}

#[derive(Debug, Clone)]
pub struct PostReplacement {
    pub id: PostId,
    pub content: PostContent,
}
