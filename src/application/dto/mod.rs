pub mod accounts;
pub mod auth;
pub mod posts;

pub use accounts::{AccountDto, PostSummaryDto};
pub use auth::{AuthTokenDto, AuthenticatedAccount, LoginResultDto};
pub use posts::{
    AuthorLikesDto, AuthorPostsDto, OwnerRef, OwnerSummary, PostDto, PostInfoDto,
    PostStatisticsDto,
};
