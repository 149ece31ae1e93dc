use super::{PostCommandService, ownership::ensure_owner};
use crate::{
    application::{
        dto::{AuthenticatedAccount, PostDto},
        error::ApplicationResult,
        queries::posts::owners::resolve_owner,
    },
    domain::post::{LikesOnMissing, PostDraft, PostId, PostReplacement},
};

pub struct ReplacePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl PostCommandService {
    /// Replaces title, author, url and likes in full. The owner reference is
    /// never touched.
    pub async fn replace_post(
        &self,
        actor: Option<&AuthenticatedAccount>,
        command: ReplacePostCommand,
    ) -> ApplicationResult<PostDto> {
        let ReplacePostCommand {
            id,
            title,
            author,
            url,
            likes,
        } = command;

        let id: PostId = id.parse()?;
        let content = PostDraft {
            title,
            author,
            url,
            likes,
        }
        .validate(LikesOnMissing::Reject)?;

        if self.owner_gated_updates {
            let existing = self.find_existing(id).await?;
            ensure_owner(actor, &existing, "update")?;
        }

        let updated = self
            .write_repo
            .replace(PostReplacement { id, content })
            .await?;

        let owner = resolve_owner(self.account_repo.as_ref(), updated.owner_id).await;
        Ok(PostDto::from_parts(updated, owner))
    }
}
