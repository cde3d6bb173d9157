//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Fetch pages and posts from the CMS and render the site
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let cms = site.cms().await?;
    let pages = cms.fetch_page_entries().await;
    let posts = cms.fetch_blog_entries().await?;

    tracing::info!("Fetched {} posts and {} pages", posts.len(), pages.len());

    Generator::new(site).generate(&pages, &posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
