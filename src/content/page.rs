//! Static split pages

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Image, RichText};

/// A static content page normalized from a `splitPage` entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitPage {
    /// Page identifier such as `WHO_ARE_WE`
    pub id: Option<String>,
    /// Short label shown in navigation
    pub label: Option<String>,
    pub title: Option<String>,
    pub body: Option<RichText>,
    pub hero: Option<Image>,
}

/// Split pages keyed by page identifier, in the order the CMS returned them
pub type Pages = IndexMap<String, SplitPage>;

/// Collect pages into a [`Pages`] mapping
///
/// Pages without a non-blank identifier cannot be addressed and are skipped; a later
/// page with the same identifier replaces an earlier one.
pub fn collect_pages(pages: impl IntoIterator<Item = SplitPage>) -> Pages {
    let mut map = Pages::new();
    for page in pages {
        match page.id.clone().filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                map.insert(id, page);
            }
            None => tracing::warn!("Skipping split page without an id"),
        }
    }
    map
}
