// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for generated pages such as the post info view.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
