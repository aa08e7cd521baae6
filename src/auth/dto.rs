use serde::{Deserialize, Serialize};

use crate::extract::{is_valid_email, require_non_empty, Validate};

/// Request body for signup and signin.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl Validate for AuthRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("email", &self.email)?;
        if !is_valid_email(&self.email) {
            return Err("email must be an email".into());
        }
        if self.password.is_empty() {
            return Err("password should not be empty".into());
        }
        Ok(())
    }
}

/// Response returned after signup or signin.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}
