use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::MalformedId(format!(
                "post id must be positive, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| DomainError::MalformedId(format!("'{s}' is not a post id")))?;
        Self::new(raw)
    }
}

fn require_min_chars(
    field: &'static str,
    value: &str,
    min: usize,
) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid(field, "is required"));
    }
    if value.chars().count() < min {
        return Err(DomainError::invalid(
            field,
            format!("must be at least {min} characters long"),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub const MIN_LENGTH: usize = 3;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        require_min_chars("title", &value, Self::MIN_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostTitle> for String {
    fn from(value: PostTitle) -> Self {
        value.0
    }
}

/// Free-text author credit of a post. Unrelated to the owning account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorName(String);

impl AuthorName {
    pub const MIN_LENGTH: usize = 3;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        require_min_chars("author", &value, Self::MIN_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUrl(String);

impl PostUrl {
    pub const MIN_LENGTH: usize = 5;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        require_min_chars("url", &value, Self::MIN_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostUrl> for String {
    fn from(value: PostUrl) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Likes(i64);

impl Likes {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::invalid("likes", "must not be negative"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<Likes> for i64 {
    fn from(value: Likes) -> Self {
        value.0
    }
}
