use tracing::{info, warn};

use crate::{
    bookmarks::{
        repo::BookmarkStore,
        repo_types::{Bookmark, BookmarkPatch, NewBookmark},
    },
    error::AppError,
};

pub async fn create_bookmark(
    store: &dyn BookmarkStore,
    user_id: i64,
    new: NewBookmark,
) -> Result<Bookmark, AppError> {
    let bookmark = store.insert(user_id, new).await?;
    info!(user_id, bookmark_id = bookmark.id, "bookmark created");
    Ok(bookmark)
}

pub async fn list_bookmarks(
    store: &dyn BookmarkStore,
    user_id: i64,
) -> Result<Vec<Bookmark>, AppError> {
    Ok(store.list_by_user(user_id).await?)
}

/// Someone else's bookmark is reported exactly like a missing one.
pub async fn get_bookmark(
    store: &dyn BookmarkStore,
    user_id: i64,
    id: i64,
) -> Result<Bookmark, AppError> {
    match store.find(id).await? {
        Some(b) if b.user_id == user_id => Ok(b),
        _ => Err(AppError::NotFound("Bookmark")),
    }
}

pub async fn edit_bookmark(
    store: &dyn BookmarkStore,
    user_id: i64,
    id: i64,
    patch: BookmarkPatch,
) -> Result<Bookmark, AppError> {
    ensure_owner(store, user_id, id).await?;
    let bookmark = store.update(id, patch).await?.ok_or(AppError::Forbidden)?;
    info!(user_id, bookmark_id = id, "bookmark updated");
    Ok(bookmark)
}

pub async fn delete_bookmark(
    store: &dyn BookmarkStore,
    user_id: i64,
    id: i64,
) -> Result<(), AppError> {
    ensure_owner(store, user_id, id).await?;
    if !store.delete(id).await? {
        return Err(AppError::Forbidden);
    }
    info!(user_id, bookmark_id = id, "bookmark deleted");
    Ok(())
}

async fn ensure_owner(store: &dyn BookmarkStore, user_id: i64, id: i64) -> Result<(), AppError> {
    match store.find(id).await? {
        Some(b) if b.user_id == user_id => Ok(()),
        _ => {
            warn!(user_id, bookmark_id = id, "access to bookmark denied");
            Err(AppError::Forbidden)
        }
    }
}
