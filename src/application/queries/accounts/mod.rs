mod get;
mod list;
mod service;

pub use get::GetAccountQuery;
pub use service::AccountQueryService;
