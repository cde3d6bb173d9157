//! Content client for the hosted CMS
//!
//! [`CmsApi`] is the single point of access to the content delivery API. It
//! fetches `post` and `splitPage` entries, resolves their links and hands
//! back normalized [`Post`] and [`SplitPage`] values.
//!
//! Error policy differs per operation: every blog fetch and
//! [`CmsApi::fetch_page_by_id`] return a [`Result`], while
//! [`CmsApi::fetch_page_entries`] cannot fail and yields an empty mapping
//! instead.

mod convert;
mod entry;
mod error;
mod slug;
mod transport;

pub use convert::Normalizer;
pub use entry::{fields_of, resolve_links, EntryCollection, Fields, RawEntry, Sys};
pub use error::{CmsError, Result};
pub use slug::{slugify, unslugify};
pub use transport::{HttpTransport, Transport};

use serde_json::Value;

use crate::config::CmsConfig;
use crate::content::{collect_pages, Pages, Post, SplitPage};

const POST_TYPE: &str = "post";
const PAGE_TYPE: &str = "splitPage";
const CREATION_ORDER: &str = "sys.createdAt";

/// Read-only client over the content delivery API
#[derive(Debug)]
pub struct CmsApi<T: Transport = HttpTransport> {
    transport: T,
    environment: String,
    include: usize,
    normalizer: Normalizer,
}

impl CmsApi<HttpTransport> {
    /// Create a client from configuration
    ///
    /// Fails when the space id or the access token is missing.
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config))
    }

    /// Create a client and check the credentials against the remote space
    pub async fn connect(config: &CmsConfig) -> Result<Self> {
        let api = Self::new(config)?;
        api.space().await?;
        Ok(api)
    }
}

impl<T: Transport> CmsApi<T> {
    /// Create a client over an explicit transport
    pub fn with_transport(transport: T, config: &CmsConfig) -> Self {
        Self {
            transport,
            environment: config.environment.clone(),
            include: config.include,
            normalizer: Normalizer::new(&config.image_scheme, "DD MMMM YYYY"),
        }
    }

    /// Replace the normalizer (image scheme, date format)
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Fetch the space record
    pub async fn space(&self) -> Result<Value> {
        self.transport.get("", &[]).await
    }

    /// All blog posts, oldest first
    pub async fn fetch_blog_entries(&self) -> Result<Vec<Post>> {
        let collection = self
            .entries(vec![
                ("content_type", POST_TYPE.to_string()),
                ("order", CREATION_ORDER.to_string()),
            ])
            .await?;

        let posts: Vec<Post> = collection
            .items
            .iter()
            .map(|entry| self.normalizer.convert_post(entry))
            .collect();
        tracing::info!(count = posts.len(), "Fetched blog entries");
        Ok(posts)
    }

    /// The post with the given entry id
    pub async fn fetch_blog_by_id(&self, id: &str) -> Result<Option<Post>> {
        let collection = self.entries(vec![("sys.id", id.to_string())]).await?;
        let post = collection
            .items
            .first()
            .map(|entry| self.normalizer.convert_post(entry));
        if post.is_none() {
            tracing::debug!(id, "No blog entry for id");
        }
        Ok(post)
    }

    /// The first post whose slug matches exactly
    pub async fn fetch_blog_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let collection = self
            .entries(vec![
                ("content_type", POST_TYPE.to_string()),
                ("fields.slug[in]", slug.to_string()),
            ])
            .await?;
        let post = collection
            .items
            .first()
            .map(|entry| self.normalizer.convert_post(entry));
        if post.is_none() {
            tracing::debug!(slug, "No blog entry for slug");
        }
        Ok(post)
    }

    /// Every split page keyed by page id
    ///
    /// Any failure yields an empty mapping.
    pub async fn fetch_page_entries(&self) -> Pages {
        let collection = self
            .entries(vec![
                ("content_type", PAGE_TYPE.to_string()),
                ("order", CREATION_ORDER.to_string()),
            ])
            .await;

        match collection {
            Ok(collection) => {
                let pages = collect_pages(
                    collection
                        .items
                        .iter()
                        .map(|entry| self.normalizer.convert_page(entry)),
                );
                tracing::info!(count = pages.len(), "Fetched page entries");
                pages
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch page entries, continuing without pages");
                Pages::new()
            }
        }
    }

    /// The split page whose `id` field matches
    pub async fn fetch_page_by_id(&self, id: &str) -> Result<Option<SplitPage>> {
        let collection = self
            .entries(vec![
                ("content_type", PAGE_TYPE.to_string()),
                ("fields.id[in]", id.to_string()),
            ])
            .await?;
        Ok(collection
            .items
            .first()
            .map(|entry| self.normalizer.convert_page(entry)))
    }

    async fn entries(&self, mut query: Vec<(&str, String)>) -> Result<EntryCollection> {
        query.push(("include", self.include.to_string()));
        let path = format!("environments/{}/entries", self.environment);
        let response = self.transport.get(&path, &query).await?;
        Ok(EntryCollection::from_response(response, self.include)?)
    }
}
