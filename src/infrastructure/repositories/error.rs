use crate::domain::errors::{DomainError, Violation};

const CNT_ACCOUNT_USERNAME: &str = "accounts_username_key";
const CNT_ACCOUNT_USERNAME_LENGTH: &str = "accounts_username_length_chk";
const CNT_POST_TITLE: &str = "posts_title_key";
const CNT_POST_LIKES: &str = "posts_likes_non_negative_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACCOUNT_USERNAME => {
                        DomainError::Conflict("username must be unique".into())
                    }
                    CNT_ACCOUNT_USERNAME_LENGTH => DomainError::Validation(
                        Violation::new("username", "is too short").into(),
                    ),
                    CNT_POST_TITLE => DomainError::Conflict("title must be unique".into()),
                    CNT_POST_LIKES => DomainError::Validation(
                        Violation::new("likes", "cannot be negative").into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                if code.as_ref() == "23505" {
                    return DomainError::Conflict("unique constraint violated".into());
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
