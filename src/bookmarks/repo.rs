use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    bookmarks::repo_types::{Bookmark, BookmarkPatch, NewBookmark},
    db::StoreError,
};

const BOOKMARK_COLUMNS: &str =
    "id, user_id, title, description, link, created_at, updated_at";

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn insert(&self, user_id: i64, new: NewBookmark) -> Result<Bookmark, StoreError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>, StoreError>;
    async fn find(&self, id: i64) -> Result<Option<Bookmark>, StoreError>;
    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<Option<Bookmark>, StoreError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct PgBookmarkStore {
    db: PgPool,
}

impl PgBookmarkStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn insert(&self, user_id: i64, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            INSERT INTO bookmarks (user_id, title, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING {BOOKMARK_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(new.title)
        .bind(new.description)
        .bind(new.link)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            SELECT {BOOKMARK_COLUMNS}
              FROM bookmarks
             WHERE user_id = $1
             ORDER BY id ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            UPDATE bookmarks
               SET title = COALESCE($2, title),
                   description = COALESCE($3, description),
                   link = COALESCE($4, link),
                   updated_at = now()
             WHERE id = $1
            RETURNING {BOOKMARK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.link)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let res = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
