use std::time::Duration;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{
    auth::{
        claims::{Claims, Identity},
        dto::AccessToken,
        error::AuthError,
    },
    config::JwtConfig,
};

/// Signing and verification keys derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: Duration::from_secs((config.ttl_minutes.max(0) as u64) * 60),
        }
    }

    /// Mint an access token for `user_id` that expires `ttl` from now.
    pub fn issue(&self, user_id: i64, email: &str) -> anyhow::Result<AccessToken> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(AccessToken { access_token })
    }

    /// Check signature and expiry, returning the identity the token carries.
    pub fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    warn!("expired token");
                    AuthError::TokenExpired
                }
                kind => {
                    warn!(?kind, "invalid token");
                    AuthError::TokenInvalid
                }
            }
        })?;
        debug!(user_id = data.claims.sub, "jwt verified");
        Ok(data.claims.into())
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let header = authorization.ok_or(AuthError::Unauthenticated)?;
    let (scheme, token) = header
        .split_once(' ')
        .ok_or(AuthError::Unauthenticated)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Unauthenticated);
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthenticated);
    }
    Ok(token)
}
