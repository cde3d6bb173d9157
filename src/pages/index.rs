//! Home page

use super::{Head, PageRenderer, HOME_OG_TITLE};
use crate::navigation::NavigationState;

impl PageRenderer {
    /// Render the home page: the body of the configured home split page
    ///
    /// A missing home page renders an empty body.
    pub fn render_index(&self, state: &NavigationState) -> String {
        let page = state.pages.get(&self.config().home_page);
        if page.is_none() {
            tracing::warn!(page = %self.config().home_page, "Home page missing from CMS pages");
        }

        let head = Head {
            title: self.config().page_title(None),
            og_title: Some(HOME_OG_TITLE.to_string()),
            description: None,
            image: None,
        };

        let main = format!(
            "<div>{}</div>",
            self.body.render(page.and_then(|p| p.body.as_ref()))
        );
        self.layout(&head, state, "/", &main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{collect_pages, RichText, SplitPage};

    #[test]
    fn test_render_index() {
        let pages = collect_pages(vec![SplitPage {
            id: Some("WHO_ARE_WE".to_string()),
            label: Some("Who are we".to_string()),
            body: Some(RichText::Markdown("We build privacy tools.".to_string())),
            ..SplitPage::default()
        }]);
        let state = NavigationState::new(pages);
        let html = PageRenderer::new(&SiteConfig::default()).render_index(&state);

        assert!(html.contains("<title>Oxen | Privacy made simple.</title>"));
        assert!(html.contains(r#"content="Oxen - Privacy should be simple.""#));
        assert!(html.contains("We build privacy tools."));
    }

    #[test]
    fn test_render_index_without_pages() {
        let html = PageRenderer::new(&SiteConfig::default()).render_index(&NavigationState::default());
        assert!(html.contains(r#"<div><div class="rich-body"></div></div>"#));
    }
}
