//! Navigation state shared by the sidebar and the page renderers

mod screen;

pub use screen::Screen;

use serde::{Deserialize, Serialize};

use crate::content::Pages;

/// Classification of the page being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageType {
    /// A split page or any other ordinary page
    #[default]
    Normal,
    /// The blog listing
    Blog,
    /// A single blog post
    Post,
}

/// Page id of the "who are we" split page shown on the home page
pub const WHO_ARE_WE: &str = "WHO_ARE_WE";

/// State changes the navigation state accepts
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    ExpandSideMenu,
    CollapseSideMenu,
    SetPageType(PageType),
    SetPostTitle(Option<String>),
    SetPages(Pages),
}

/// Navigation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub side_menu_expanded: bool,
    pub page_type: PageType,
    /// Title of the displayed post, when `page_type` is `Post`
    pub post_title: Option<String>,
    pub pages: Pages,
}

impl NavigationState {
    pub fn new(pages: Pages) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// State for rendering a blog post page
    pub fn for_post(pages: Pages, title: &str) -> Self {
        Self {
            page_type: PageType::Post,
            post_title: Some(title.to_string()),
            pages,
            ..Self::default()
        }
    }

    /// State for rendering the blog listing
    pub fn for_blog(pages: Pages) -> Self {
        Self {
            page_type: PageType::Blog,
            pages,
            ..Self::default()
        }
    }

    /// Apply an action
    pub fn apply(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::ExpandSideMenu => self.side_menu_expanded = true,
            NavigationAction::CollapseSideMenu => self.side_menu_expanded = false,
            NavigationAction::SetPageType(page_type) => {
                self.page_type = page_type;
                if page_type != PageType::Post {
                    self.post_title = None;
                }
            }
            NavigationAction::SetPostTitle(title) => self.post_title = title,
            NavigationAction::SetPages(pages) => self.pages = pages,
        }
    }
}
