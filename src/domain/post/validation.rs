// src/domain/post/validation.rs
use crate::domain::errors::{DomainError, DomainResult, Violations};
use crate::domain::post::entity::PostContent;
use crate::domain::post::value_objects::{AuthorName, Likes, PostTitle, PostUrl};

/// What to do when a payload carries no `likes` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikesOnMissing {
    /// Creation: an omitted count starts at zero.
    DefaultToZero,
    /// Full replacement: the count must be supplied.
    Reject,
}

/// Unvalidated post fields as they arrive from a client.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl PostDraft {
    /// Checks every field and reports all violations at once.
    pub fn validate(self, on_missing_likes: LikesOnMissing) -> DomainResult<PostContent> {
        let mut violations = Violations::new();

        let title = required(&mut violations, "title", self.title, PostTitle::new);
        let author = required(&mut violations, "author", self.author, AuthorName::new);
        let url = required(&mut violations, "url", self.url, PostUrl::new);

        let likes = match (self.likes, on_missing_likes) {
            (Some(raw), _) => Likes::new(raw).map_err(|err| violations.absorb(err)).ok(),
            (None, LikesOnMissing::DefaultToZero) => Some(Likes::default()),
            (None, LikesOnMissing::Reject) => {
                violations.push("likes", "is required");
                None
            }
        };

        match (title, author, url, likes) {
            (Some(title), Some(author), Some(url), Some(likes)) if violations.is_empty() => {
                Ok(PostContent {
                    title,
                    author,
                    url,
                    likes,
                })
            }
            _ => Err(DomainError::Validation(violations)),
        }
    }
}

fn required<T>(
    violations: &mut Violations,
    field: &'static str,
    value: Option<String>,
    build: impl FnOnce(String) -> DomainResult<T>,
) -> Option<T> {
    match value {
        Some(raw) => build(raw).map_err(|err| violations.absorb(err)).ok(),
        None => {
            violations.push(field, "is required");
            None
        }
    }
}
