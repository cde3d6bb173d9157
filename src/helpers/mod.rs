//! Helper functions for page rendering
//!
//! URL generation, HTML snippets, date formatting and list rendering used
//! by the components and page renderers.

mod date;
mod html;
mod list;
mod url;

pub use date::*;
pub use html::*;
pub use list::*;
pub use url::*;

use crate::config::SiteConfig;

/// Helpers bound to a site configuration
#[derive(Debug, Clone)]
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn url_for(&self, path: &str) -> String {
        url_for(&self.config, path)
    }

    pub fn full_url_for(&self, path: &str) -> String {
        full_url_for(&self.config, path)
    }

    pub fn image_tag(&self, path: &str, alt: Option<&str>, title: Option<&str>) -> String {
        image_tag(&self.config, path, alt, title)
    }

    pub fn blog_path(&self) -> String {
        blog_path(&self.config)
    }

    pub fn post_path(&self, slug: &str) -> String {
        post_path(&self.config, slug)
    }

    pub fn list_posts(&self, posts: &[crate::content::Post]) -> String {
        list_posts(&self.config, posts, None)
    }
}
