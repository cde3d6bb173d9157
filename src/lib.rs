//! cms-site: content client and page renderer for a CMS-backed site
//!
//! Fetches blog posts and split pages from a Contentful space, normalizes
//! them into plain domain records, and renders them into a static site
//! with a navigation side bar.

pub mod cms;
pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod navigation;
pub mod pages;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The site application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site from a directory
    ///
    /// Reads `_config.yml` when present, then overlays CMS credentials from
    /// the environment.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env();

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Content client for the configured space
    ///
    /// Fails when a credential is missing or the CMS rejects it.
    pub async fn cms(&self) -> Result<cms::CmsApi> {
        let api = cms::CmsApi::connect(&self.config.cms)
            .await?
            .with_normalizer(cms::Normalizer::new(
                &self.config.cms.image_scheme,
                &self.config.date_format,
            ));
        Ok(api)
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
