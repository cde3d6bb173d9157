//! Normalization from CMS entries to content models
//!
//! Every function here is total: a missing or mistyped field becomes `None`,
//! an empty list or an empty string, never an error.

use super::entry::{fields_of, Fields, RawEntry};
use crate::content::{Author, Image, Post, RichText, SplitPage};
use crate::helpers::{format_date, parse_date};

/// Converts raw entries into posts, pages, images and authors
#[derive(Debug, Clone)]
pub struct Normalizer {
    image_scheme: String,
    date_format: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new("http", "DD MMMM YYYY")
    }
}

impl Normalizer {
    pub fn new(image_scheme: &str, date_format: &str) -> Self {
        Self {
            image_scheme: image_scheme.trim_end_matches("://").to_string(),
            date_format: date_format.to_string(),
        }
    }

    /// Normalize an asset's fields into an image
    ///
    /// An asset without a file URL carries nothing displayable and reads as
    /// absent.
    pub fn convert_image(&self, raw: Option<Fields<'_>>) -> Option<Image> {
        let raw = raw?;
        let Some(url) = raw.object("file").and_then(|file| file.str("url")) else {
            tracing::warn!("Image asset without a file url");
            return None;
        };

        Some(Image {
            image_url: self.absolute_url(&url),
            description: raw.str("description"),
            title: raw.str("title"),
        })
    }

    /// Normalize an author entry's fields
    pub fn convert_author(&self, raw: Option<Fields<'_>>) -> Option<Author> {
        let raw = raw?;
        Some(Author {
            name: raw.str("name"),
            avatar: self.convert_image(raw.linked("avatar")),
            short_bio: raw.str("shortBio"),
            position: raw.str("position"),
            email: raw.str("email"),
            twitter: raw.str("twitter"),
            facebook: raw.str("facebook"),
            github: raw.str("github"),
        })
    }

    /// Normalize a `post` entry
    pub fn convert_post(&self, entry: &RawEntry) -> Post {
        let raw = entry.fields();

        let published_date = raw
            .str("publishedDate")
            .and_then(|date| parse_date(&date))
            .map(|date| format_date(&date, &self.date_format));

        let tags = raw
            .list("tags")
            .map(|tags| {
                tags.iter()
                    .filter_map(|tag| fields_of(tag).and_then(|f| f.str("label")))
                    .collect()
            })
            .unwrap_or_default();

        let slug = raw.str("slug").unwrap_or_default();
        let title = raw.str("title").unwrap_or_default();
        if slug.is_empty() || title.is_empty() {
            tracing::warn!(id = ?entry.sys.id, "Post entry without slug or title");
        }

        Post {
            id: entry.sys.id.clone(),
            body: raw.value("body").and_then(RichText::from_value),
            subtitle: raw.str("subtitle"),
            description: raw.str("description"),
            published_date,
            slug,
            tags,
            title,
            feature_image: self.convert_image(raw.linked("featureImage")),
            author: self.convert_author(raw.linked("author")),
        }
    }

    /// Normalize a `splitPage` entry
    pub fn convert_page(&self, entry: &RawEntry) -> SplitPage {
        let raw = entry.fields();
        SplitPage {
            id: raw.str("id"),
            label: raw.str("label"),
            title: raw.str("title"),
            body: raw.value("body").and_then(RichText::from_value),
            hero: self.convert_image(raw.linked("hero")),
        }
    }

    /// Give protocol-relative asset URLs (`//host/path`) an explicit scheme
    pub fn absolute_url(&self, url: &str) -> String {
        match url.strip_prefix("//") {
            Some(rest) => format!("{}://{}", self.image_scheme, rest),
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn entry(value: Value) -> RawEntry {
        serde_json::from_value(value).unwrap()
    }

    fn image_fields(value: &Value) -> Option<Fields<'_>> {
        value.as_object().map(Fields::new)
    }

    #[test]
    fn test_convert_image() {
        let n = Normalizer::default();
        let raw = json!({ "file": { "url": "//cdn.example.com/x.png" } });
        let image = n.convert_image(image_fields(&raw)).unwrap();
        assert_eq!(image.image_url, "http://cdn.example.com/x.png");
        assert_eq!(image.description, None);
        assert_eq!(image.title, None);

        let raw = json!({
            "file": { "url": "https://cdn.example.com/y.png" },
            "title": "Y",
            "description": "A y"
        });
        let image = n.convert_image(image_fields(&raw)).unwrap();
        assert_eq!(image.image_url, "https://cdn.example.com/y.png");
        assert_eq!(image.title.as_deref(), Some("Y"));
        assert_eq!(image.description.as_deref(), Some("A y"));
    }

    #[test]
    fn test_convert_image_absent() {
        let n = Normalizer::default();
        assert!(n.convert_image(None).is_none());
        let raw = json!({ "title": "no file" });
        assert!(n.convert_image(image_fields(&raw)).is_none());
    }

    #[test]
    fn test_image_scheme() {
        let n = Normalizer::new("https://", "DD MMMM YYYY");
        assert_eq!(n.absolute_url("//a/b.png"), "https://a/b.png");
    }

    #[test]
    fn test_convert_author() {
        let n = Normalizer::default();
        let raw = json!({
            "name": "Jane",
            "shortBio": "Writes things",
            "position": "Editor",
            "email": "jane@example.com",
            "twitter": "https://twitter.com/jane",
            "avatar": { "sys": { "id": "a" }, "fields": { "file": { "url": "//img/jane.png" } } }
        });
        let author = n.convert_author(image_fields(&raw)).unwrap();
        assert_eq!(author.name.as_deref(), Some("Jane"));
        assert_eq!(author.short_bio.as_deref(), Some("Writes things"));
        assert_eq!(author.position.as_deref(), Some("Editor"));
        assert_eq!(author.email.as_deref(), Some("jane@example.com"));
        assert_eq!(author.twitter.as_deref(), Some("https://twitter.com/jane"));
        assert_eq!(author.facebook, None);
        assert_eq!(author.github, None);
        assert_eq!(author.avatar.unwrap().image_url, "http://img/jane.png");

        assert!(n.convert_author(None).is_none());
    }

    #[test]
    fn test_author_without_avatar() {
        let n = Normalizer::default();
        let raw = json!({ "name": "No Face" });
        let author = n.convert_author(image_fields(&raw)).unwrap();
        assert_eq!(author.name.as_deref(), Some("No Face"));
        assert!(author.avatar.is_none());
    }

    #[test]
    fn test_convert_post() {
        let n = Normalizer::default();
        let post = n.convert_post(&entry(json!({
            "sys": { "id": "post-1" },
            "fields": {
                "title": "Hello",
                "subtitle": "World",
                "description": "Intro",
                "slug": "hello",
                "publishedDate": "2020-05-14T00:00+10:00",
                "body": "Some **markdown**",
                "tags": [
                    { "sys": { "id": "t1" }, "fields": { "label": "privacy" } },
                    { "sys": { "type": "Link", "linkType": "Entry", "id": "t2" } },
                    { "sys": { "id": "t3" }, "fields": { "label": "news" } }
                ],
                "featureImage": { "fields": { "file": { "url": "//img/f.png" }, "title": "F" } },
                "author": { "fields": { "name": "Jane" } }
            }
        })));

        assert_eq!(post.id.as_deref(), Some("post-1"));
        assert_eq!(post.title, "Hello");
        assert_eq!(post.subtitle.as_deref(), Some("World"));
        assert_eq!(post.description.as_deref(), Some("Intro"));
        assert_eq!(post.slug, "hello");
        assert_eq!(post.published_date.as_deref(), Some("14 May 2020"));
        assert_eq!(post.body, Some(RichText::Markdown("Some **markdown**".to_string())));
        assert_eq!(post.tags, vec!["privacy", "news"]);
        assert_eq!(post.feature_image.unwrap().image_url, "http://img/f.png");
        assert_eq!(post.author.unwrap().name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_convert_post_partial() {
        let n = Normalizer::default();
        let post = n.convert_post(&entry(json!({ "sys": {}, "fields": {} })));

        assert_eq!(post.id, None);
        assert!(post.tags.is_empty());
        assert_eq!(post.title, "");
        assert_eq!(post.slug, "");
        assert_eq!(post.published_date, None);
        assert!(post.body.is_none());
        assert!(post.feature_image.is_none());
        assert!(post.author.is_none());
    }

    #[test]
    fn test_post_title_not_truncated() {
        let n = Normalizer::default();
        let title = "x".repeat(200);
        let post = n.convert_post(&entry(json!({ "sys": {}, "fields": { "title": title } })));
        assert_eq!(post.title.chars().count(), 200);
    }

    #[test]
    fn test_convert_page() {
        let n = Normalizer::default();
        let page = n.convert_page(&entry(json!({
            "sys": { "id": "sys-id" },
            "fields": {
                "id": "WHO_ARE_WE",
                "label": "Who are we",
                "title": "We are Oxen",
                "hero": { "fields": { "file": { "url": "//img/hero.jpg" } } }
            }
        })));

        assert_eq!(page.id.as_deref(), Some("WHO_ARE_WE"));
        assert_eq!(page.label.as_deref(), Some("Who are we"));
        assert_eq!(page.title.as_deref(), Some("We are Oxen"));
        assert!(page.body.is_none());
        assert_eq!(page.hero.unwrap().image_url, "http://img/hero.jpg");

        let empty = n.convert_page(&entry(json!({ "sys": { "id": "x" } })));
        assert_eq!(empty, SplitPage::default());
    }
}
