use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::dto::{AccessToken, AuthRequest},
    error::AppError,
    extract::ValidJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> Result<(StatusCode, Json<AccessToken>), AppError> {
    let token = state.auth.sign_up(&payload.email, payload.password).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> Result<Json<AccessToken>, AppError> {
    let token = state.auth.sign_in(&payload.email, payload.password).await?;
    Ok(Json(token))
}
