// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorName, Likes, NewPost, Post, PostContent, PostId, PostReadRepository, PostReplacement,
    PostTitle, PostUrl, PostWriteRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    author: String,
    url: String,
    likes: i64,
    owner_id: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let content = PostContent {
            title: PostTitle::new(row.title)?,
            author: AuthorName::new(row.author)?,
            url: PostUrl::new(row.url)?,
            likes: Likes::new(row.likes)?,
        };
        Ok(Post::from_parts(
            PostId::new(row.id)?,
            content,
            AccountId::new(row.owner_id)?,
        ))
    }
}

fn collect_posts(rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    rows.into_iter().map(Post::try_from).collect()
}

#[async_trait]
impl PostWriteRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost { content, owner_id } = post;
        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, author, url, likes, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, author, url, likes, owner_id",
        )
        .bind(content.title.as_str())
        .bind(content.author.as_str())
        .bind(content.url.as_str())
        .bind(content.likes.get())
        .bind(i64::from(owner_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn replace(&self, replacement: PostReplacement) -> DomainResult<Post> {
        let PostReplacement { id, content } = replacement;
        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET title = $2, author = $3, url = $4, likes = $5
             WHERE id = $1
             RETURNING id, title, author, url, likes, owner_id",
        )
        .bind(i64::from(id))
        .bind(content.title.as_str())
        .bind(content.author.as_str())
        .bind(content.url.as_str())
        .bind(content.likes.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("post {id} does not exist")))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("post {id} does not exist")));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, author, url, likes, owner_id FROM posts WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, author, url, likes, owner_id FROM posts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_posts(rows)
    }

    async fn list_by_owner(&self, owner_id: AccountId) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, author, url, likes, owner_id FROM posts
             WHERE owner_id = $1 ORDER BY id",
        )
        .bind(i64::from(owner_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        collect_posts(rows)
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }
}
