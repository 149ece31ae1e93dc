pub mod accounts;
pub mod posts;
