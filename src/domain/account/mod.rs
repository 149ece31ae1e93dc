// src/domain/account/mod.rs
pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Account, NewAccount};
pub use repository::AccountRepository;
pub use validation::{MIN_PASSWORD_LENGTH, RegistrationDraft, ValidRegistration};
pub use value_objects::{AccountId, PasswordHash, UsernameMatching, Username};
