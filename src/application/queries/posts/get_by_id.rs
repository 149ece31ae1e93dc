use super::{PostQueryService, owners::resolve_owner};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostQuery {
    pub id: String,
}

impl PostQueryService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let id: PostId = query.id.parse()?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post {id} does not exist")))?;

        let owner = resolve_owner(self.account_repo.as_ref(), post.owner_id).await;
        Ok(PostDto::from_parts(post, owner))
    }
}
