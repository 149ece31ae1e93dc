// tests/support/mocks.rs
use bloglist_api::application::{
    ApplicationResult,
    ports::{security::PasswordHasher, time::Clock},
};
use chrono::{DateTime, TimeZone, Utc};

/// Reversible stand-in for argon2 so tests stay fast. The digest still never
/// equals the plaintext.
pub struct PlainPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash.strip_prefix("plain$") == Some(password))
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
