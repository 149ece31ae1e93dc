// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedAccount, OwnerRef, OwnerSummary, PostDto},
        error::ApplicationResult,
    },
    domain::post::{LikesOnMissing, NewPost, PostDraft},
};

pub struct CreatePostCommand {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl From<CreatePostCommand> for PostDraft {
    fn from(command: CreatePostCommand) -> Self {
        Self {
            title: command.title,
            author: command.author,
            url: command.url,
            likes: command.likes,
        }
    }
}

impl PostCommandService {
    /// Stores a post owned by `actor`. The owner always comes from the
    /// authenticated identity, never from the payload.
    pub async fn create_post(
        &self,
        actor: &AuthenticatedAccount,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let content = PostDraft::from(command).validate(LikesOnMissing::DefaultToZero)?;

        let post = self
            .write_repo
            .insert(NewPost {
                content,
                owner_id: actor.id,
            })
            .await?;

        // Second, independent write. The owned-post list is only an index, so
        // a failure here leaves the post valid and is not reported upward.
        if let Err(err) = self.account_repo.append_owned_post(actor.id, post.id).await {
            tracing::warn!(
                account_id = %actor.id,
                post_id = %post.id,
                error = %err,
                "post stored but owned-post index was not updated"
            );
        }

        tracing::info!(account_id = %actor.id, post_id = %post.id, "post created");

        let owner = OwnerRef::Account(OwnerSummary {
            id: actor.id.into(),
            username: actor.username.clone(),
            name: actor.name.clone(),
        });
        Ok(PostDto::from_parts(post, owner))
    }
}
