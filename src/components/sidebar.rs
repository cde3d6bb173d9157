//! Side menu side bar
//!
//! The slim vertical bar next to the side menu. In `Menu` mode it carries
//! the expand/collapse toggle of the responsive side menu; in `Label` mode
//! it shows the current page, blog or post label rotated vertically.
//!
//! [`SidebarView::derive`] is a pure function of the navigation state, the
//! viewport and the current path. [`toggle`] is the only operation with an
//! effect: it hands one [`NavigationAction`] to the caller's dispatcher.

use serde::{Deserialize, Serialize};

use crate::cms::slugify;
use crate::helpers::{class_names, html_escape, route_slug, truncate_chars, Helpers};
use crate::navigation::{NavigationAction, NavigationState, PageType, Screen};

/// Width of the bar in CSS pixels
pub const SIDE_BAR_WIDTH_PX: u32 = 50;

/// Longest post title shown in the bar
pub const POST_LABEL_MAX_CHARS: usize = 120;

const TRIANGLE_SVG: &str = r#"<svg viewBox="0 0 10 9" xmlns="http://www.w3.org/2000/svg"><path d="M5 0l5 9H0z"/></svg>"#;

/// What the bar displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SideBarMode {
    Menu,
    Label,
}

/// Where the static back link points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    /// The blog listing, shown on a post
    Blog,
    /// The home page, shown on the blog listing
    Home,
}

/// The control rendered at the top of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Interactive triangle that expands or collapses the side menu
    Toggle { expanded: bool },
    /// Plain link back to the blog or home page
    BackLink(BackTarget),
    None,
}

/// Everything needed to render the bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub mode: SideBarMode,
    pub label: Option<String>,
    pub collapsible: bool,
    pub expanded: bool,
    pub huge: bool,
    pub affordance: Affordance,
}

impl SidebarView {
    /// Derive the bar from navigation state, viewport and current path
    pub fn derive(
        mode: SideBarMode,
        state: &NavigationState,
        screen: &Screen,
        path: &str,
    ) -> Self {
        let collapsible = is_collapsible(state, screen);
        let expanded = state.side_menu_expanded;

        let affordance = if collapsible {
            Affordance::Toggle { expanded }
        } else {
            match state.page_type {
                PageType::Post => Affordance::BackLink(BackTarget::Blog),
                PageType::Blog => Affordance::BackLink(BackTarget::Home),
                PageType::Normal => Affordance::None,
            }
        };

        Self {
            mode,
            label: sidebar_label(state, path),
            collapsible,
            expanded,
            huge: screen.is_huge,
            affordance,
        }
    }

    /// Text shown rotated in the bar
    pub fn text(&self) -> Option<&str> {
        match self.mode {
            SideBarMode::Label => self.label.as_deref(),
            SideBarMode::Menu => Some("Menu"),
        }
    }

    /// Classes of the bar container
    pub fn class(&self) -> String {
        class_names(&[
            (
                "flex flex-col justify-between items-center h-full bg-blue-300 px-4 py-6 border-l border-black",
                true,
            ),
            ("text-3xl", self.huge),
            ("w-12 text-2xl", !self.huge),
            ("border-r border-b", self.mode == SideBarMode::Label),
            ("border-r", self.mode == SideBarMode::Menu && !self.expanded),
        ])
    }

    /// Render the bar as HTML
    pub fn render(&self, helpers: &Helpers) -> String {
        let control = match self.affordance {
            Affordance::Toggle { expanded } => {
                let (action, rotation) = if expanded {
                    ("collapse", "rotate-180")
                } else {
                    ("expand", "-rotate-60")
                };
                format!(
                    r#"<button type="button" class="{}" data-action="{}" aria-expanded="{}">{}</button>"#,
                    class_names(&[
                        ("h-4 transform outline-none duration-300 cursor-pointer", true),
                        (rotation, true),
                    ]),
                    action,
                    expanded,
                    TRIANGLE_SVG
                )
            }
            Affordance::BackLink(target) => {
                let href = match target {
                    BackTarget::Blog => helpers.url_for(&helpers.blog_path()),
                    BackTarget::Home => helpers.url_for("/"),
                };
                format!(
                    r#"<a href="{}"><span class="h-4 transform outline-none duration-300 rotate-180 cursor-pointer">{}</span></a>"#,
                    html_escape(&href),
                    TRIANGLE_SVG
                )
            }
            Affordance::None => String::new(),
        };

        format!(
            concat!(
                r#"<div class="{}" style="width: {}px">"#,
                "<div>{}</div>",
                r#"<div class="flex items-center justify-start w-0 h-0 duration-300 transform -rotate-90">"#,
                r#"<span class="whitespace-no-wrap">{}</span>"#,
                "</div></div>"
            ),
            self.class(),
            SIDE_BAR_WIDTH_PX,
            control,
            html_escape(self.text().unwrap_or_default())
        )
    }
}

/// Label for the current page
///
/// A post shows its title cut to [`POST_LABEL_MAX_CHARS`] characters, the
/// blog listing shows `Blog`, any other page shows the label of the split
/// page whose slugified id matches the path.
pub fn sidebar_label(state: &NavigationState, path: &str) -> Option<String> {
    match state.page_type {
        PageType::Post => state
            .post_title
            .as_deref()
            .map(|title| truncate_chars(title, POST_LABEL_MAX_CHARS)),
        PageType::Blog => Some("Blog".to_string()),
        PageType::Normal => {
            let route = route_slug(path);
            state
                .pages
                .values()
                .find(|page| page.id.as_deref().map(slugify).as_deref() == Some(&*route))
                .and_then(|page| page.label.clone())
        }
    }
}

/// Whether the bar toggles the side menu
pub fn is_collapsible(state: &NavigationState, screen: &Screen) -> bool {
    screen.is_compact() && state.page_type == PageType::Normal
}

/// Handle a click on the toggle
///
/// Reads the current state and dispatches `ExpandSideMenu` when collapsed or
/// `CollapseSideMenu` when expanded. Does nothing when the bar is not
/// collapsible. Returns whether an action was dispatched.
pub fn toggle<F>(state: &NavigationState, screen: &Screen, mut dispatch: F) -> bool
where
    F: FnMut(NavigationAction),
{
    if !is_collapsible(state, screen) {
        return false;
    }

    dispatch(if state.side_menu_expanded {
        NavigationAction::CollapseSideMenu
    } else {
        NavigationAction::ExpandSideMenu
    });
    true
}
