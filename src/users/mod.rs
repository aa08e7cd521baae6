mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

/// Profile routes. Every route here expects the auth gate in front of it.
pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
