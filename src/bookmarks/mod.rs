mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
mod services;

use crate::state::AppState;
use axum::Router;

/// Bookmark CRUD. Every route here expects the auth gate in front of it.
pub fn router() -> Router<AppState> {
    handlers::bookmark_routes()
}
