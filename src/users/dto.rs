use serde::Deserialize;

use crate::{
    extract::{is_valid_email, Validate},
    users::repo_types::UserPatch,
};

/// Body of `PATCH /users`. Omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Validate for EditUserRequest {
    fn validate(&self) -> Result<(), String> {
        match &self.email {
            Some(email) if !is_valid_email(email) => Err("email must be an email".into()),
            _ => Ok(()),
        }
    }
}

impl From<EditUserRequest> for UserPatch {
    fn from(r: EditUserRequest) -> Self {
        Self {
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
        }
    }
}
