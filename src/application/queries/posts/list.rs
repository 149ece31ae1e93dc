use super::{
    PostQueryService,
    owners::{lookup, owner_index},
};
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostQueryService {
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list().await?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let owners = owner_index(self.account_repo.as_ref()).await;
        Ok(posts
            .into_iter()
            .map(|post| {
                let owner = lookup(&owners, post.owner_id);
                PostDto::from_parts(post, owner)
            })
            .collect())
    }
}
