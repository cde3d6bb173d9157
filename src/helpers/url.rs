//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;

use crate::cms::slugify;
use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/site/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Path of the blog listing (`/blog`)
pub fn blog_path(config: &SiteConfig) -> String {
    format!("/{}", config.blog_dir.trim_matches('/'))
}

/// Path of a post (`/blog/<slug>`)
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    format!("{}/{}", blog_path(config), encode_segment(slug))
}

/// Path of a split page, derived from its CMS id (`WHO_ARE_WE` -> `/who-are-we`)
pub fn page_path(id: &str) -> String {
    format!("/{}", encode_segment(&slugify(id)))
}

/// Reduce a request path to the form compared against page slugs
///
/// Leading and trailing slashes, query and fragment are dropped and
/// percent-escapes are decoded, so the result matches an unencoded slug.
pub fn route_slug(path: &str) -> Cow<'_, str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    percent_decode_str(path[..end].trim_matches('/')).decode_utf8_lossy()
}
