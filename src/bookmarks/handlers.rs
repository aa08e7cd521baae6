use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CreateBookmarkRequest, EditBookmarkRequest},
    repo_types::Bookmark,
    services,
};
use crate::{auth::extractors::CurrentUser, error::AppError, extract::ValidJson, state::AppState};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidJson(payload): ValidJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let bookmark =
        services::create_bookmark(state.bookmarks.as_ref(), user.id(), payload.into()).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip(state))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    let items = services::list_bookmarks(state.bookmarks.as_ref(), user.id()).await?;
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Bookmark>, AppError> {
    let bookmark = services::get_bookmark(state.bookmarks.as_ref(), user.id(), id).await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state, payload))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    let bookmark =
        services::edit_bookmark(state.bookmarks.as_ref(), user.id(), id, payload.into()).await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::delete_bookmark(state.bookmarks.as_ref(), user.id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
