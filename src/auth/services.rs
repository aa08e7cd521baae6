use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::{
    auth::{
        claims::Identity,
        dto::AccessToken,
        error::AuthError,
        jwt::{bearer_token, JwtKeys},
        password::{hash_password, verify_password},
    },
    db::StoreError,
    users::repo::UserStore,
};

/// Credential handling and token issuance over a [`UserStore`].
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    keys: JwtKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, keys: JwtKeys) -> Self {
        Self { users, keys }
    }

    pub async fn sign_up(&self, email: &str, password: String) -> Result<AccessToken, AuthError> {
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("hash task failed")??;

        let user = match self.users.create(email, &hash).await {
            Ok(u) => u,
            Err(StoreError::Conflict) => {
                warn!(email, "signup with taken email");
                return Err(AuthError::CredentialsConflict);
            }
            Err(StoreError::Other(e)) => return Err(e.context("create user").into()),
        };

        info!(user_id = user.id, email = %user.email, "user registered");
        Ok(self.keys.issue(user.id, &user.email)?)
    }

    pub async fn sign_in(&self, email: &str, password: String) -> Result<AccessToken, AuthError> {
        let user = match self.users.find_by_email(email).await {
            Ok(Some(u)) => u,
            Ok(None) => {
                warn!(email, "signin unknown email");
                return Err(AuthError::CredentialsInvalid);
            }
            Err(e) => return Err(anyhow::Error::from(e).context("find user by email").into()),
        };

        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .context("verify task failed")??;
        if !matches {
            warn!(user_id = user.id, "signin wrong password");
            return Err(AuthError::CredentialsInvalid);
        }

        info!(user_id = user.id, "user signed in");
        Ok(self.keys.issue(user.id, &user.email)?)
    }

    /// Resolve a raw `Authorization` header value to the identity it carries.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<Identity, AuthError> {
        let token = bearer_token(authorization)?;
        self.keys.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::JwtConfig, test_support::MemoryUserStore};

    fn service() -> (AuthService, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::default());
        let keys = JwtKeys::new(&JwtConfig {
            secret: "test-secret".into(),
            ttl_minutes: 15,
        });
        (AuthService::new(store.clone(), keys), store)
    }

    fn bearer(token: &AccessToken) -> String {
        format!("Bearer {}", token.access_token)
    }

    #[tokio::test]
    async fn signup_then_signin_yields_same_subject() {
        let (auth, store) = service();
        let signed_up = auth.sign_up("test@gmail.com", "test".into()).await.unwrap();
        let signed_in = auth.sign_in("test@gmail.com", "test".into()).await.unwrap();

        let user = store.find_by_email("test@gmail.com").await.unwrap().unwrap();
        let a = auth.authorize(Some(&bearer(&signed_up))).unwrap();
        let b = auth.authorize(Some(&bearer(&signed_in))).unwrap();
        assert_eq!(a.user_id, user.id);
        assert_eq!(b.user_id, user.id);
        assert_eq!(b.email, "test@gmail.com");
    }

    #[tokio::test]
    async fn stored_hash_is_not_the_plaintext() {
        let (auth, store) = service();
        auth.sign_up("test@gmail.com", "test".into()).await.unwrap();
        let user = store.find_by_email("test@gmail.com").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "test");
        assert!(verify_password("test", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts_without_second_row() {
        let (auth, store) = service();
        auth.sign_up("test@gmail.com", "test".into()).await.unwrap();
        let err = auth
            .sign_up("test@gmail.com", "other".into())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::CredentialsConflict));
        assert_eq!(store.len(), 1);

        let err = auth.sign_up("test@gmail.com", "test".into()).await.unwrap_err();
        assert!(matches!(err, AuthError::CredentialsConflict));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let (auth, store) = service();
        auth.sign_up("test@gmail.com", "test".into()).await.unwrap();
        auth.sign_up("Test@gmail.com", "test".into()).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_look_the_same() {
        let (auth, _) = service();
        auth.sign_up("test@gmail.com", "test".into()).await.unwrap();

        let unknown = auth
            .sign_in("nobody@gmail.com", "test".into())
            .await
            .unwrap_err();
        let wrong = auth
            .sign_in("test@gmail.com", "wrong".into())
            .await
            .unwrap_err();

        assert!(matches!(unknown, AuthError::CredentialsInvalid));
        assert!(matches!(wrong, AuthError::CredentialsInvalid));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(unknown.status_code(), wrong.status_code());
    }

    #[tokio::test]
    async fn corrupt_stored_hash_is_an_internal_fault() {
        let (auth, store) = service();
        store.create("broken@gmail.com", "not-a-phc-string").await.unwrap();
        let err = auth
            .sign_in("broken@gmail.com", "test".into())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[tokio::test]
    async fn store_failures_propagate_as_internal() {
        let (auth, store) = service();
        store.fail_next();
        let err = auth.sign_up("test@gmail.com", "test".into()).await.unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));

        store.fail_next();
        let err = auth.sign_in("test@gmail.com", "test".into()).await.unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn authorize_without_header_is_unauthenticated() {
        let (auth, _) = service();
        assert!(matches!(auth.authorize(None), Err(AuthError::Unauthenticated)));
        assert!(matches!(
            auth.authorize(Some("Token abc")),
            Err(AuthError::Unauthenticated)
        ));
        assert!(matches!(
            auth.authorize(Some("Bearer abc")),
            Err(AuthError::TokenInvalid)
        ));
    }
}
