//! HTTP transport for the content delivery API

use async_trait::async_trait;
use serde_json::Value;

use super::error::{CmsError, Result};
use crate::config::CmsConfig;

/// Read-only access to the CMS JSON API
///
/// Paths are relative to the space root (`/spaces/{space}`), e.g.
/// `environments/master/entries`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value>;
}

/// Transport backed by a `reqwest` client and a static bearer token
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpTransport {
    /// Create a transport from the CMS configuration
    ///
    /// Fails when the space id or the access token is missing.
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let space_id = non_empty(config.space_id.as_deref())
            .ok_or(CmsError::MissingCredential("space_id"))?;
        let access_token = non_empty(config.access_token.as_deref())
            .ok_or(CmsError::MissingCredential("access_token"))?;

        Ok(Self::with_base_url(
            format!("{}/spaces/{}", config.api_root(), space_id),
            access_token.to_string(),
        ))
    }

    /// Create a transport against an explicit space root URL
    pub fn with_base_url(base_url: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, ?query, "CMS request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &raw));
        }

        Ok(serde_json::from_str(&raw)?)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Build an API error from a CMS error body (`{"sys":{"id":…},"message":…}`)
fn api_error(status: u16, raw: &str) -> CmsError {
    let value: Option<Value> = serde_json::from_str(raw).ok();
    let id = value
        .as_ref()
        .and_then(|v| v.pointer("/sys/id"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();
    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| raw.trim().to_string());

    CmsError::Api {
        status,
        id,
        message,
    }
}
