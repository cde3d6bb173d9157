//! List site content

use anyhow::Result;

use crate::helpers::tag_counts;
use crate::Site;

/// List CMS content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    let cms = site.cms().await?;

    match content_type {
        "post" | "posts" => {
            let posts = cms.fetch_blog_entries().await?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.published_date.as_deref().unwrap_or("undated"),
                    post.title,
                    post.slug
                );
            }
        }
        "page" | "pages" => {
            let pages = cms.fetch_page_entries().await;
            println!("Pages ({}):", pages.len());
            for (id, page) in pages {
                println!("  {} [{}]", page.label.as_deref().unwrap_or(&id), id);
            }
        }
        "tag" | "tags" => {
            let posts = cms.fetch_blog_entries().await?;
            let tags = tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, tag",
                content_type
            );
        }
    }

    Ok(())
}
