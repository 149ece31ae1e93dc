// src/application/queries/posts/statistics.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PostInfoDto, PostStatisticsDto, PostSummaryDto},
        error::ApplicationResult,
    },
    domain::post::statistics,
};

impl PostQueryService {
    pub async fn post_statistics(&self) -> ApplicationResult<PostStatisticsDto> {
        let posts = self.read_repo.list().await?;

        Ok(PostStatisticsDto {
            total_likes: statistics::total_likes(&posts),
            favorite_post: statistics::favorite_post(&posts).map(PostSummaryDto::from),
            most_posts: statistics::author_with_most_posts(&posts).map(Into::into),
            most_likes: statistics::author_with_most_likes(&posts).map(Into::into),
        })
    }

    pub async fn post_info(&self) -> ApplicationResult<PostInfoDto> {
        let count = self.read_repo.count().await?;
        Ok(PostInfoDto {
            count,
            generated_at: self.clock.now(),
        })
    }
}
