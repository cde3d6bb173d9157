//! Blog listing and post pages

use super::{Head, PageRenderer};
use crate::content::{Author, Post};
use crate::helpers::{html_escape, list_tags, truncate_chars};
use crate::navigation::NavigationState;

/// Longest body excerpt used as the page description
const DESCRIPTION_MAX_CHARS: usize = 160;

impl PageRenderer {
    /// Render the blog listing, newest post first
    pub fn render_blog(&self, posts: &[Post], state: &NavigationState) -> String {
        let head = Head {
            title: self.config().page_title(Some("Blog")),
            ..Head::default()
        };

        let newest_first: Vec<Post> = posts.iter().rev().cloned().collect();
        let main = format!(
            r#"<section class="blog"><h1>Blog</h1>{}</section>"#,
            self.helpers.list_posts(&newest_first)
        );
        self.layout(&head, state, &self.helpers.blog_path(), &main)
    }

    /// Render one post; `posts` is the full list in creation order
    pub fn render_post(&self, post: &Post, posts: &[Post], state: &NavigationState) -> String {
        let head = Head {
            title: self.config().page_title(Some(&post.title)),
            og_title: Some(post.title.clone()),
            description: post.description.clone().or_else(|| {
                post.body
                    .as_ref()
                    .map(|body| truncate_chars(&body.plain_text(), DESCRIPTION_MAX_CHARS))
                    .filter(|text| !text.is_empty())
            }),
            image: post.feature_image.as_ref().map(|img| img.image_url.clone()),
        };

        let mut main = String::from(r#"<article class="post">"#);
        if let Some(image) = &post.feature_image {
            main.push_str(&self.figure(image, "feature-image"));
        }
        main.push_str(&format!("<h1>{}</h1>", html_escape(&post.title)));
        if let Some(subtitle) = &post.subtitle {
            main.push_str(&format!("<h2>{}</h2>", html_escape(subtitle)));
        }
        if let Some(date) = &post.published_date {
            main.push_str(&format!(r#"<p class="post-date">{}</p>"#, html_escape(date)));
        }
        main.push_str(&list_tags(&post.tags, None));
        if let Some(author) = &post.author {
            main.push_str(&self.author_card(author));
        }
        main.push_str(&self.body.render(post.body.as_ref()));
        main.push_str(&self.post_nav(post, posts));
        main.push_str("</article>");

        self.layout(&head, state, &self.helpers.post_path(&post.slug), &main)
    }

    fn author_card(&self, author: &Author) -> String {
        let mut html = String::from(r#"<div class="author">"#);
        if let Some(avatar) = &author.avatar {
            html.push_str(&self.figure(avatar, "avatar"));
        }
        if let Some(name) = &author.name {
            html.push_str(&format!(r#"<span class="author-name">{}</span>"#, html_escape(name)));
        }
        if let Some(position) = &author.position {
            html.push_str(&format!(
                r#"<span class="author-position">{}</span>"#,
                html_escape(position)
            ));
        }
        if let Some(bio) = &author.short_bio {
            html.push_str(&format!(r#"<p class="author-bio">{}</p>"#, html_escape(bio)));
        }
        for (network, url) in author.social_links() {
            html.push_str(&format!(
                r#"<a class="author-{}" href="{}" target="_blank" rel="noopener">{}</a>"#,
                network,
                html_escape(url),
                network
            ));
        }
        html.push_str("</div>");
        html
    }

    /// Links to the neighbouring posts
    fn post_nav(&self, post: &Post, posts: &[Post]) -> String {
        let link = |class: &str, other: Option<&Post>| {
            other
                .map(|p| {
                    format!(
                        r#"<a class="{}" href="{}">{}</a>"#,
                        class,
                        html_escape(&self.helpers.url_for(&self.helpers.post_path(&p.slug))),
                        html_escape(&p.title)
                    )
                })
                .unwrap_or_default()
        };

        let prev = link("post-prev", post.prev(posts));
        let next = link("post-next", post.next(posts));
        if prev.is_empty() && next.is_empty() {
            return String::new();
        }
        format!(r#"<nav class="post-nav">{}{}</nav>"#, prev, next)
    }
}
