//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Join the class lists whose condition holds
///
/// # Examples
/// ```ignore
/// class_names(&[("flex h-full", true), ("border-r", false)]) // -> "flex h-full"
/// ```
pub fn class_names(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(class, enabled)| *enabled && !class.trim().is_empty())
        .map(|(class, _)| class.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate an image tag for an absolute or site-relative source
pub fn image_tag(
    config: &SiteConfig,
    path: &str,
    alt: Option<&str>,
    title: Option<&str>,
) -> String {
    let src = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let alt = alt.unwrap_or("");
    let title_attr = title
        .map(|t| format!(r#" title="{}""#, html_escape(t)))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        html_escape(&src),
        html_escape(alt),
        title_attr
    )
}

/// Generate Open Graph meta tags
pub fn open_graph(title: &str, description: &str, url: &str, image: Option<&str>) -> String {
    let mut tags = vec![
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}" key="title">"#,
            html_escape(title)
        ),
        format!(
            r#"<meta property="og:url" content="{}">"#,
            html_escape(url)
        ),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(description)
        ));
    }

    if let Some(img) = image {
        tags.push(format!(
            r#"<meta property="og:image" content="{}">"#,
            html_escape(img)
        ));
    }

    tags.join("\n")
}

/// Meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="cms-site {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Keep at most `length` characters, without an omission marker
pub fn truncate_chars(s: &str, length: usize) -> String {
    s.chars().take(length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/".to_string();
        config
    }

    #[test]
    fn test_class_names() {
        assert_eq!(
            class_names(&[("flex h-full", true), ("text-3xl", false), ("border-r", true)]),
            "flex h-full border-r"
        );
        assert_eq!(class_names(&[("a", false)]), "");
    }

    #[test]
    fn test_image_tag() {
        let config = test_config();
        assert_eq!(
            image_tag(&config, "http://img/a.png", Some("A & B"), None),
            r#"<img src="http://img/a.png" alt="A &amp; B">"#
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(html_escape(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 120), "hi");
    }
}
