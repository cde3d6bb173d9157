//! Rich text body rendering

use serde_json::Value;

use crate::cms::{fields_of, Normalizer};
use crate::content::{MarkdownRenderer, Node, RichText};
use crate::helpers::html_escape;

/// Renders body fields to HTML
#[derive(Debug, Clone, Default)]
pub struct RichBody {
    markdown: MarkdownRenderer,
    normalizer: Normalizer,
}

impl RichBody {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
            normalizer,
        }
    }

    /// Render a body wrapped in its container; an absent body renders an empty container
    pub fn render(&self, body: Option<&RichText>) -> String {
        let inner = match body {
            Some(RichText::Markdown(markdown)) => self.markdown.render(markdown),
            Some(RichText::Document(node)) => self.render_node(node),
            None => String::new(),
        };
        format!(r#"<div class="rich-body">{}</div>"#, inner)
    }

    fn render_children(&self, node: &Node) -> String {
        node.content.iter().map(|child| self.render_node(child)).collect()
    }

    fn render_node(&self, node: &Node) -> String {
        match node.node_type.as_str() {
            "document" => self.render_children(node),
            "text" => self.render_text(node),
            "paragraph" => self.wrap("p", node),
            "heading-1" => self.wrap("h1", node),
            "heading-2" => self.wrap("h2", node),
            "heading-3" => self.wrap("h3", node),
            "heading-4" => self.wrap("h4", node),
            "heading-5" => self.wrap("h5", node),
            "heading-6" => self.wrap("h6", node),
            "unordered-list" => self.wrap("ul", node),
            "ordered-list" => self.wrap("ol", node),
            "list-item" => self.wrap("li", node),
            "blockquote" => self.wrap("blockquote", node),
            "hr" => "<hr>".to_string(),
            "hyperlink" => {
                let uri = node
                    .data
                    .get("uri")
                    .and_then(Value::as_str)
                    .unwrap_or("#");
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                    html_escape(uri),
                    self.render_children(node)
                )
            }
            "embedded-asset-block" => self.render_embedded_asset(node),
            other => {
                tracing::debug!(node_type = other, "Rendering unknown rich text node as its children");
                self.render_children(node)
            }
        }
    }

    fn wrap(&self, tag: &str, node: &Node) -> String {
        format!("<{tag}>{}</{tag}>", self.render_children(node))
    }

    fn render_text(&self, node: &Node) -> String {
        let mut html = html_escape(node.value.as_deref().unwrap_or_default());
        for (mark, tag) in [
            ("code", "code"),
            ("underline", "u"),
            ("italic", "em"),
            ("bold", "strong"),
        ] {
            if node.has_mark(mark) {
                html = format!("<{tag}>{html}</{tag}>");
            }
        }
        html
    }

    fn render_embedded_asset(&self, node: &Node) -> String {
        let image = node
            .data
            .get("target")
            .and_then(fields_of)
            .and_then(|fields| self.normalizer.convert_image(Some(fields)));

        match image {
            Some(image) => {
                let alt = image
                    .description
                    .as_deref()
                    .or(image.title.as_deref())
                    .unwrap_or_default();
                format!(
                    r#"<figure><img src="{}" alt="{}"></figure>"#,
                    html_escape(&image.image_url),
                    html_escape(alt)
                )
            }
            None => String::new(),
        }
    }
}
