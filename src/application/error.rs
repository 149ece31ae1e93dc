// src/application/error.rs
use crate::domain::errors::{DomainError, Violation};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

/// User-facing failure category. The transport picks status codes from this,
/// never from the concrete error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    MalformedIdentifier,
    NotFound,
    InvalidCredentials,
    InvalidToken,
    Forbidden,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::MalformedIdentifier => "malformed_identifier",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidCredentials => "invalid_credentials",
            ErrorKind::InvalidToken => "invalid_token",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Internal => "internal",
        }
    }
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Domain(domain) => match domain {
                // A duplicate unique key is reported as a failed validation.
                DomainError::Validation(_) | DomainError::Conflict(_) => ErrorKind::Validation,
                DomainError::MalformedId(_) => ErrorKind::MalformedIdentifier,
                DomainError::NotFound(_) => ErrorKind::NotFound,
                DomainError::Persistence(_) => ErrorKind::Internal,
            },
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::InvalidCredentials => ErrorKind::InvalidCredentials,
            ApplicationError::InvalidToken(_) => ErrorKind::InvalidToken,
            ApplicationError::Forbidden(_) => ErrorKind::Forbidden,
            ApplicationError::Infrastructure(_) => ErrorKind::Internal,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ApplicationError::Domain(DomainError::Validation(violations)) => {
                violations.as_slice()
            }
            _ => &[],
        }
    }

    /// Message safe to show a client. Internal failures stay opaque.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => "internal server error".into(),
            _ => match self {
                ApplicationError::Domain(DomainError::Validation(violations)) => {
                    violations.to_string()
                }
                ApplicationError::Domain(DomainError::Conflict(msg))
                | ApplicationError::Domain(DomainError::MalformedId(msg))
                | ApplicationError::Domain(DomainError::NotFound(msg))
                | ApplicationError::NotFound(msg)
                | ApplicationError::InvalidToken(msg)
                | ApplicationError::Forbidden(msg) => msg.clone(),
                other => other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_domain_failures() {
        let cases = [
            (
                ApplicationError::from(DomainError::invalid("title", "is required")),
                ErrorKind::Validation,
            ),
            (
                ApplicationError::from(DomainError::Conflict("username must be unique".into())),
                ErrorKind::Validation,
            ),
            (
                ApplicationError::from(DomainError::MalformedId("x".into())),
                ErrorKind::MalformedIdentifier,
            ),
            (
                ApplicationError::from(DomainError::NotFound("post".into())),
                ErrorKind::NotFound,
            ),
            (
                ApplicationError::from(DomainError::Persistence("db down".into())),
                ErrorKind::Internal,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.kind(), expected, "{err}");
        }
    }

    #[test]
    fn token_and_ownership_failures_stay_distinct() {
        assert_eq!(
            ApplicationError::invalid_token("bad signature").kind(),
            ErrorKind::InvalidToken
        );
        assert_eq!(
            ApplicationError::forbidden("not the owner").kind(),
            ErrorKind::Forbidden
        );
        assert_eq!(
            ApplicationError::InvalidCredentials.kind(),
            ErrorKind::InvalidCredentials
        );
    }

    #[test]
    fn internal_messages_are_opaque() {
        let err = ApplicationError::from(DomainError::Persistence("password=hunter2".into()));
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn validation_errors_expose_violations() {
        let err = ApplicationError::from(DomainError::invalid("url", "is required"));
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.public_message(), "url: is required");
        assert!(ApplicationError::InvalidCredentials.violations().is_empty());
    }
}
