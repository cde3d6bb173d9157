//! List helper functions for tag lists and post listings

use std::collections::HashMap;

use super::html::html_escape;
use super::url::{post_path, url_for};
use crate::config::SiteConfig;
use crate::content::Post;

/// Generate the tag list of one post as HTML
pub fn list_tags(tags: &[String], class: Option<&str>) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let class = class.unwrap_or("tag-list");
    let mut html = format!(r#"<ul class="{}">"#, class);
    for tag in tags {
        html.push_str(&format!(
            r#"<li class="{}-item">{}</li>"#,
            class,
            html_escape(tag)
        ));
    }
    html.push_str("</ul>");
    html
}

/// Count posts per tag, most used first, then by name
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = tags
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}

/// Generate a list of posts as HTML
pub fn list_posts(config: &SiteConfig, posts: &[Post], class: Option<&str>) -> String {
    if posts.is_empty() {
        return String::new();
    }

    let class = class.unwrap_or("post-list");
    let mut html = format!(r#"<ul class="{}">"#, class);

    for post in posts {
        let url = url_for(config, &post_path(config, &post.slug));
        html.push_str(&format!(r#"<li class="{}-item">"#, class));

        if let Some(date) = &post.published_date {
            html.push_str(&format!(
                r#"<span class="{}-date">{}</span>"#,
                class,
                html_escape(date)
            ));
        }

        html.push_str(&format!(
            r#"<a class="{}-link" href="{}">{}</a>"#,
            class,
            html_escape(&url),
            html_escape(&post.title)
        ));

        if let Some(description) = &post.description {
            html.push_str(&format!(
                r#"<p class="{}-description">{}</p>"#,
                class,
                html_escape(description)
            ));
        }

        html.push_str(&list_tags(&post.tags, None));
        html.push_str("</li>");
    }

    html.push_str("</ul>");
    html
}
