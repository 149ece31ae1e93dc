// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_account;
mod postgres_post;

pub use error::map_sqlx;
pub use memory::{InMemoryAccountRepository, InMemoryPostRepository};
pub use postgres_account::PostgresAccountRepository;
pub use postgres_post::PostgresPostRepository;
