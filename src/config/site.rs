//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::navigation::Screen;

/// Environment variable holding the CMS space id
pub const SPACE_ID_ENV: &str = "CONTENTFUL_SPACE_ID";
/// Environment variable holding the CMS delivery access token
pub const ACCESS_TOKEN_ENV: &str = "CONTENTFUL_ACCESS_TOKEN";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Appended to page titles and used alone on the home page
    pub title_suffix: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub blog_dir: String,

    /// Id of the split page rendered on the home page
    pub home_page: String,

    // Date format (Moment.js tokens)
    pub date_format: String,

    /// Viewport the static pages are rendered for
    pub viewport: Viewport,

    #[serde(default)]
    pub cms: CmsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Oxen".to_string(),
            title_suffix: "Oxen | Privacy made simple.".to_string(),
            description: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),

            home_page: "WHO_ARE_WE".to_string(),

            date_format: "DD MMMM YYYY".to_string(),

            viewport: Viewport::Desktop,

            cms: CmsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Overlay CMS secrets from the process environment
    pub fn apply_env(&mut self) {
        self.cms
            .apply_overrides(std::env::var(SPACE_ID_ENV).ok(), std::env::var(ACCESS_TOKEN_ENV).ok());
    }

    /// Page title for a named page, e.g. `Blog | Oxen | Privacy made simple.`
    pub fn page_title(&self, name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("{} | {}", name, self.title_suffix),
            None => self.title_suffix.clone(),
        }
    }
}

/// Content delivery API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: String,
    /// API host, or a full base URL (`http://127.0.0.1:8080`)
    pub host: String,
    /// Link resolution depth requested from the API
    pub include: usize,
    /// Scheme used for protocol-relative asset URLs
    pub image_scheme: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            access_token: None,
            environment: "master".to_string(),
            host: "cdn.contentful.com".to_string(),
            include: 2,
            image_scheme: "http".to_string(),
        }
    }
}

impl CmsConfig {
    /// Root URL of the API, without trailing slash
    pub fn api_root(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Replace credentials with non-empty override values
    pub fn apply_overrides(&mut self, space_id: Option<String>, access_token: Option<String>) {
        if let Some(space_id) = space_id.filter(|v| !v.trim().is_empty()) {
            self.space_id = Some(space_id);
        }
        if let Some(access_token) = access_token.filter(|v| !v.trim().is_empty()) {
            self.access_token = Some(access_token);
        }
    }
}

/// Viewport class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
    Huge,
}

impl Viewport {
    pub fn screen(self) -> Screen {
        Screen {
            is_mobile: self == Viewport::Mobile,
            is_tablet: self == Viewport::Tablet,
            is_desktop: self == Viewport::Desktop || self == Viewport::Huge,
            is_huge: self == Viewport::Huge,
        }
    }
}
