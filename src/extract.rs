use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AppError;

/// Request body checks run after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// JSON body extractor that turns every body problem into a 400 and then
/// runs [`Validate`] on the payload.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                warn!(error = %e.body_text(), "rejected request body");
                AppError::BadRequest(e.body_text())
            })?;
        value.validate().map_err(|msg| {
            warn!(%msg, "request validation failed");
            AppError::BadRequest(msg)
        })?;
        Ok(ValidJson(value))
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} should not be empty"));
    }
    Ok(())
}
