use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{auth::error::AuthError, state::AppState};

/// Gate for protected routes: validates the bearer token and stores the
/// resulting [`Identity`](crate::auth::claims::Identity) in the request
/// extensions. Rejected requests never reach the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let identity = state.auth.authorize(authorization)?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
