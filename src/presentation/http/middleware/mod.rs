// src/presentation/http/middleware/mod.rs
mod identity;

pub use identity::resolve_identity;
