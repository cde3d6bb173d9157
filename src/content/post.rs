//! Post and author models

use serde::{Deserialize, Serialize};

use super::RichText;

/// A blog post normalized from a `post` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// CMS-assigned entry id
    pub id: Option<String>,

    /// Post body
    pub body: Option<RichText>,

    pub subtitle: Option<String>,

    /// Short description shown in listings
    pub description: Option<String>,

    /// Publication date formatted for display (`14 May 2020`)
    pub published_date: Option<String>,

    /// Slug (URL-friendly name), empty when the entry has none
    pub slug: String,

    /// Tag labels in CMS order
    pub tags: Vec<String>,

    /// Post title, empty when the entry has none
    pub title: String,

    pub feature_image: Option<Image>,

    pub author: Option<Author>,
}

impl Post {
    /// Create a post with only the required fields set
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: None,
            body: None,
            subtitle: None,
            description: None,
            published_date: None,
            slug: slug.into(),
            tags: Vec::new(),
            title: title.into(),
            feature_image: None,
            author: None,
        }
    }

    /// Get the previous post in a list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next post in a list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos + 1 < posts.len() {
            Some(&posts[pos + 1])
        } else {
            None
        }
    }
}

/// An image asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Absolute image URL
    pub image_url: String,
    pub description: Option<String>,
    pub title: Option<String>,
}

/// A post author
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: Option<String>,
    pub avatar: Option<Image>,
    pub short_bio: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub github: Option<String>,
}

impl Author {
    /// Social profile links that are set, as `(network, url)` pairs
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("twitter", self.twitter.as_deref()),
            ("facebook", self.facebook.as_deref()),
            ("github", self.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| url.map(|url| (network, url)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_next() {
        let posts = vec![Post::new("A", "a"), Post::new("B", "b"), Post::new("C", "c")];
        assert_eq!(posts[1].prev(&posts).map(|p| p.slug.as_str()), Some("a"));
        assert_eq!(posts[1].next(&posts).map(|p| p.slug.as_str()), Some("c"));
        assert!(posts[0].prev(&posts).is_none());
        assert!(posts[2].next(&posts).is_none());
    }

    #[test]
    fn test_social_links() {
        let author = Author {
            twitter: Some("https://twitter.com/x".to_string()),
            github: Some("https://github.com/x".to_string()),
            ..Author::default()
        };
        assert_eq!(
            author.social_links(),
            vec![
                ("twitter", "https://twitter.com/x"),
                ("github", "https://github.com/x")
            ]
        );
    }
}
