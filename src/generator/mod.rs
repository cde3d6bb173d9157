//! Generator module - renders fetched CMS content into static HTML files

use anyhow::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::cms::slugify;
use crate::content::{Pages, Post};
use crate::helpers::page_path;
use crate::navigation::NavigationState;
use crate::pages::PageRenderer;
use crate::Site;

/// Static site generator
pub struct Generator {
    public_dir: PathBuf,
    renderer: PageRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self {
            public_dir: site.public_dir.clone(),
            renderer: PageRenderer::new(&site.config),
        }
    }

    /// Generate the entire site
    ///
    /// `posts` are expected in creation order, as the CMS returns them.
    /// Posts whose slug cannot name a directory are left out of the site.
    pub fn generate(&self, pages: &Pages, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.public_dir)?;

        let posts: Vec<Post> = posts
            .iter()
            .filter(|post| {
                let ok = is_path_segment(&post.slug);
                if !ok {
                    tracing::warn!(id = ?post.id, slug = %post.slug, "Skipping post without a usable slug");
                }
                ok
            })
            .cloned()
            .collect();

        self.generate_index(pages)?;
        self.generate_split_pages(pages)?;
        self.generate_blog(pages, &posts)?;
        self.generate_posts(pages, &posts)?;

        Ok(())
    }

    fn generate_index(&self, pages: &Pages) -> Result<()> {
        let state = NavigationState::new(pages.clone());
        let html = self.renderer.render_index(&state);
        self.write("/", &html)
    }

    fn generate_split_pages(&self, pages: &Pages) -> Result<()> {
        let state = NavigationState::new(pages.clone());
        let blog_path = self.renderer.helpers().blog_path();
        for (id, page) in pages {
            if !is_path_segment(&slugify(id)) {
                tracing::warn!(id = %id, "Skipping split page without a usable id");
                continue;
            }
            let path = page_path(id);
            if path == blog_path {
                tracing::warn!(id = %id, "Skipping split page that collides with the blog listing");
                continue;
            }
            let html = self.renderer.render_split_page(page, &state, &path);
            self.write(&path, &html)?;
        }
        Ok(())
    }

    fn generate_blog(&self, pages: &Pages, posts: &[Post]) -> Result<()> {
        let state = NavigationState::for_blog(pages.clone());
        let html = self.renderer.render_blog(posts, &state);
        self.write(&self.renderer.helpers().blog_path(), &html)
    }

    fn generate_posts(&self, pages: &Pages, posts: &[Post]) -> Result<()> {
        for post in posts {
            let state = NavigationState::for_post(pages.clone(), &post.title);
            let html = self.renderer.render_post(post, posts, &state);
            self.write(&self.renderer.helpers().post_path(&post.slug), &html)?;
        }
        Ok(())
    }

    /// Write a page to `<public_dir>/<path>/index.html`
    fn write(&self, path: &str, html: &str) -> Result<()> {
        // Strip leading slash from path to avoid creating absolute paths
        let clean_path = path.trim_matches('/');
        if !Path::new(clean_path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            anyhow::bail!("Refusing to write outside {:?}: {:?}", self.public_dir, path);
        }
        let output_path = self.public_dir.join(clean_path).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, html)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}

/// Whether a slug can stand as one directory name under the output root
fn is_path_segment(slug: &str) -> bool {
    !slug.trim().is_empty() && slug != "." && slug != ".."
}
