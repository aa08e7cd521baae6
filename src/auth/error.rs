use axum::http::StatusCode;

/// Failures of the authentication and authorization core.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Credentials taken")]
    CredentialsConflict,
    /// Shared by the unknown-email and wrong-password signin paths.
    #[error("Credentials incorrect")]
    CredentialsInvalid,
    #[error("Unauthorized")]
    Unauthenticated,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid token")]
    TokenInvalid,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::CredentialsConflict | AuthError::CredentialsInvalid => StatusCode::FORBIDDEN,
            AuthError::Unauthenticated | AuthError::TokenExpired | AuthError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
