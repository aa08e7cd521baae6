use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::auth::{claims::Identity, error::AuthError};

/// The authenticated caller, as placed in the request by
/// [`require_auth`](super::middleware::require_auth).
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.0.user_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::Unauthenticated)
    }
}
