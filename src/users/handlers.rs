use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{error::AuthError, extractors::CurrentUser},
    db::StoreError,
    error::AppError,
    extract::ValidJson,
    state::AppState,
    users::{dto::EditUserRequest, repo_types::User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<User>, AppError> {
    match state.users.find_by_id(user.id()).await? {
        Some(u) => Ok(Json(u)),
        None => {
            warn!(user_id = user.id(), "token for missing user");
            Err(AppError::NotFound("User"))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn edit_user(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidJson(payload): ValidJson<EditUserRequest>,
) -> Result<Json<User>, AppError> {
    let updated = match state.users.update(user.id(), payload.into()).await {
        Ok(Some(u)) => u,
        Ok(None) => return Err(AppError::NotFound("User")),
        Err(StoreError::Conflict) => {
            warn!(user_id = user.id(), "email change to a taken address");
            return Err(AuthError::CredentialsConflict.into());
        }
        Err(e) => return Err(e.into()),
    };
    info!(user_id = updated.id, "user updated");
    Ok(Json(updated))
}
