//! Page renderers
//!
//! Each renderer produces a complete HTML document: head, the side bar in
//! `Label` mode, and the page content.

mod blog;
mod index;

use crate::cms::Normalizer;
use crate::components::{RichBody, SideBarMode, SidebarView};
use crate::config::SiteConfig;
use crate::content::{Image, SplitPage};
use crate::helpers::{html_escape, meta_generator, open_graph, Helpers};
use crate::navigation::{NavigationState, Screen};

/// `og:title` of the home page
pub const HOME_OG_TITLE: &str = "Oxen - Privacy should be simple.";

/// Head metadata of a page
#[derive(Debug, Clone, Default)]
pub struct Head {
    pub title: String,
    pub og_title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Renders pages for one site configuration and viewport
pub struct PageRenderer {
    helpers: Helpers,
    body: RichBody,
    screen: Screen,
}

impl PageRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        let normalizer = Normalizer::new(&config.cms.image_scheme, &config.date_format);
        Self {
            helpers: Helpers::new(config.clone()),
            body: RichBody::new(normalizer),
            screen: config.viewport.screen(),
        }
    }

    pub fn helpers(&self) -> &Helpers {
        &self.helpers
    }

    fn config(&self) -> &SiteConfig {
        self.helpers.config()
    }

    /// Render a split page at its own path
    pub fn render_split_page(&self, page: &SplitPage, state: &NavigationState, path: &str) -> String {
        let head = Head {
            title: self.config().page_title(page.label.as_deref().or(page.title.as_deref())),
            og_title: page.title.clone(),
            description: None,
            image: page.hero.as_ref().map(|hero| hero.image_url.clone()),
        };

        let mut main = String::new();
        if let Some(hero) = &page.hero {
            main.push_str(&self.figure(hero, "hero"));
        }
        if let Some(title) = &page.title {
            main.push_str(&format!("<h1>{}</h1>", html_escape(title)));
        }
        main.push_str(&self.body.render(page.body.as_ref()));

        self.layout(&head, state, path, &main)
    }

    /// Wrap page content in the document layout
    pub fn layout(&self, head: &Head, state: &NavigationState, path: &str, main: &str) -> String {
        let sidebar = SidebarView::derive(SideBarMode::Label, state, &self.screen, path);
        let og = open_graph(
            head.og_title.as_deref().unwrap_or(&head.title),
            head.description.as_deref().unwrap_or_default(),
            &self.helpers.full_url_for(path),
            head.image.as_deref(),
        );

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{generator}
{og}
</head>
<body>
<div class="flex h-screen">
{sidebar}
<main class="flex-1 overflow-y-auto">
{main}
</main>
</div>
</body>
</html>
"#,
            title = html_escape(&head.title),
            generator = meta_generator(),
            og = og,
            sidebar = sidebar.render(&self.helpers),
            main = main,
        )
    }

    fn figure(&self, image: &Image, class: &str) -> String {
        format!(
            r#"<figure class="{}">{}</figure>"#,
            class,
            self.helpers.image_tag(
                &image.image_url,
                image.description.as_deref().or(image.title.as_deref()),
                image.title.as_deref(),
            )
        )
    }
}
