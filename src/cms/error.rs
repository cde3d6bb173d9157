//! Content client errors

use thiserror::Error;

/// Errors surfaced by the content client
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Missing CMS credential: {0}")]
    MissingCredential(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS API error ({status}) {id}: {message}")]
    Api {
        status: u16,
        id: String,
        message: String,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CmsError {
    /// Whether the remote service answered with a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CmsError::Api { status: 404, .. })
            || matches!(self, CmsError::Api { id, .. } if id == "NotFound")
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;
