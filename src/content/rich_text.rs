//! Rich text bodies
//!
//! Body fields are either a rich text document (a tree of typed nodes) or a
//! plain long-text field holding markdown.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A body field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Document(Node),
    Markdown(String),
}

impl RichText {
    /// Interpret a raw field value as a body
    ///
    /// Returns `None` for values that are neither a node tree nor a string.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RichText::Markdown(s.clone())),
            Value::Object(map) if map.contains_key("nodeType") => {
                match serde_json::from_value(value.clone()) {
                    Ok(node) => Some(RichText::Document(node)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Unreadable rich text document");
                        None
                    }
                }
            }
            _ => None,
        }
    }

    /// Concatenated text content, without markup
    pub fn plain_text(&self) -> String {
        match self {
            RichText::Markdown(s) => s.clone(),
            RichText::Document(node) => {
                let mut out = String::new();
                node.collect_text(&mut out);
                out.trim().to_string()
            }
        }
    }
}

/// A rich text node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    pub node_type: String,
    pub content: Vec<Node>,
    pub value: Option<String>,
    pub marks: Vec<Mark>,
    pub data: Value,
}

impl Node {
    pub fn has_mark(&self, kind: &str) -> bool {
        self.marks.iter().any(|m| m.kind == kind)
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(value) = &self.value {
            out.push_str(value);
        }
        for child in &self.content {
            child.collect_text(out);
        }
        if matches!(
            self.node_type.as_str(),
            "paragraph" | "heading-1" | "heading-2" | "heading-3" | "list-item"
        ) {
            out.push(' ');
        }
    }
}

/// Text formatting mark (`bold`, `italic`, `underline`, `code`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
}
