use std::sync::Arc;

use crate::auth::{jwt::JwtKeys, services::AuthService};
use crate::bookmarks::repo::{BookmarkStore, PgBookmarkStore};
use crate::config::AppConfig;
use crate::db;
use crate::users::repo::{PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub bookmarks: Arc<dyn BookmarkStore>,
    pub auth: AuthService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let pool = db::connect(&config).await?;

        if let Err(e) = db::migrate(&pool).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let users = Arc::new(PgUserStore::new(pool.clone())) as Arc<dyn UserStore>;
        let bookmarks = Arc::new(PgBookmarkStore::new(pool)) as Arc<dyn BookmarkStore>;
        Ok(Self::from_parts(&config, users, bookmarks))
    }

    /// The signing secret is taken from `config` once, here.
    pub fn from_parts(
        config: &AppConfig,
        users: Arc<dyn UserStore>,
        bookmarks: Arc<dyn BookmarkStore>,
    ) -> Self {
        let auth = AuthService::new(users.clone(), JwtKeys::new(&config.jwt));
        Self {
            users,
            bookmarks,
            auth,
        }
    }
}
