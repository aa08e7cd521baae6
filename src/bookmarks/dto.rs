use serde::Deserialize;

use crate::{
    bookmarks::repo_types::{BookmarkPatch, NewBookmark},
    extract::{require_non_empty, Validate},
};

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

impl Validate for CreateBookmarkRequest {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("title", &self.title)?;
        require_non_empty("link", &self.link)
    }
}

impl From<CreateBookmarkRequest> for NewBookmark {
    fn from(r: CreateBookmarkRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            link: r.link,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl Validate for EditBookmarkRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }
        if let Some(link) = &self.link {
            require_non_empty("link", link)?;
        }
        Ok(())
    }
}

impl From<EditBookmarkRequest> for BookmarkPatch {
    fn from(r: EditBookmarkRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            link: r.link,
        }
    }
}
