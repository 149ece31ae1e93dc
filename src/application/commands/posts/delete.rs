// src/application/commands/posts/delete.rs
use super::{PostCommandService, ownership::ensure_owner};
use crate::{
    application::{dto::AuthenticatedAccount, error::ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: String,
}

impl PostCommandService {
    /// Existence is checked before ownership so a missing post is always
    /// reported as not found, whoever asks.
    pub async fn delete_post(
        &self,
        actor: Option<&AuthenticatedAccount>,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id: PostId = command.id.parse()?;
        let post = self.find_existing(id).await?;

        ensure_owner(actor, &post, "delete")?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, owner_id = %post.owner_id, "post deleted");
        Ok(())
    }
}
