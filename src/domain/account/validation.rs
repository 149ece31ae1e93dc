// src/domain/account/validation.rs
use crate::domain::account::value_objects::Username;
use crate::domain::errors::{DomainError, DomainResult, Violations};

pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Raw registration input, checked before any hashing or persistence.
#[derive(Debug, Clone)]
pub struct RegistrationDraft<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// Registration input that passed validation.
#[derive(Debug, Clone)]
pub struct ValidRegistration<'a> {
    pub username: Username,
    pub password: &'a str,
}

impl<'a> RegistrationDraft<'a> {
    pub fn validate(&self) -> DomainResult<ValidRegistration<'a>> {
        let mut violations = Violations::new();

        let username = match self.username {
            Some(raw) => Username::new(raw).map_err(|err| violations.absorb(err)).ok(),
            None => {
                violations.push("username", "is required");
                None
            }
        };

        let password = match self.password {
            None => {
                violations.push("password", "is required");
                None
            }
            Some(raw) if raw.chars().count() < MIN_PASSWORD_LENGTH => {
                violations.push(
                    "password",
                    format!("must be at least {MIN_PASSWORD_LENGTH} characters long"),
                );
                None
            }
            Some(raw) => Some(raw),
        };

        match (username, password) {
            (Some(username), Some(password)) if violations.is_empty() => {
                Ok(ValidRegistration { username, password })
            }
            _ => Err(DomainError::Validation(violations)),
        }
    }
}
