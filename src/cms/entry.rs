//! Raw CMS entries and link resolution
//!
//! Entries arrive as `{"sys": {...}, "fields": {...}}` where the shape of
//! `fields` depends on the content type. `sys` is typed, `fields` stays a
//! dynamic map read through [`Fields`], so that normalization can default any
//! missing or mistyped field instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// System metadata attached to every CMS record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sys {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub link_type: Option<String>,
    pub content_type: Option<Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A single CMS record (entry or asset)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub sys: Sys,
    pub fields: Map<String, Value>,
}

impl RawEntry {
    /// Content type id, e.g. `post` or `splitPage`
    pub fn content_type(&self) -> Option<&str> {
        self.sys
            .content_type
            .as_ref()
            .and_then(|ct| ct.pointer("/sys/id"))
            .and_then(Value::as_str)
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields(&self.fields)
    }
}

/// A collection response from the entries endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryCollection {
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    pub items: Vec<RawEntry>,
}

impl EntryCollection {
    /// Decode a collection response, resolving links up to `depth` levels
    pub fn from_response(mut response: Value, depth: usize) -> serde_json::Result<Self> {
        resolve_links(&mut response, depth);
        serde_json::from_value(response)
    }
}

/// Read-only view over an entry's dynamic field map
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self(map)
    }

    /// Non-null value of a field
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// String field; any other JSON type reads as absent
    pub fn str(&self, key: &str) -> Option<String> {
        self.value(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Array field
    pub fn list(&self, key: &str) -> Option<&'a Vec<Value>> {
        self.value(key).and_then(Value::as_array)
    }

    /// Nested plain object, e.g. the `file` object of an asset
    pub fn object(&self, key: &str) -> Option<Fields<'a>> {
        self.value(key).and_then(Value::as_object).map(Fields)
    }

    /// Field set of a linked record, available once the link was resolved
    pub fn linked(&self, key: &str) -> Option<Fields<'a>> {
        self.value(key).and_then(fields_of)
    }
}

/// The `fields` map of a resolved record value
pub fn fields_of(value: &Value) -> Option<Fields<'_>> {
    value.get("fields").and_then(Value::as_object).map(Fields)
}

type LinkKey = (String, String);

/// Replace link objects inside `items[*].fields` by the records they point to
///
/// Targets are looked up in `includes.Entry`, `includes.Asset` and the
/// top-level items. Links that cannot be resolved are left untouched.
pub fn resolve_links(response: &mut Value, depth: usize) {
    let index = build_index(response);
    if index.is_empty() {
        return;
    }

    if let Some(items) = response.get_mut("items").and_then(Value::as_array_mut) {
        for item in items {
            if let Some(fields) = item.get_mut("fields") {
                resolve_value(fields, &index, depth);
            }
        }
    }
}

fn build_index(response: &Value) -> HashMap<LinkKey, Value> {
    let mut index = HashMap::new();

    let mut add = |records: Option<&Value>, link_type: &str| {
        for record in records.and_then(Value::as_array).into_iter().flatten() {
            if let Some(id) = record.pointer("/sys/id").and_then(Value::as_str) {
                index.insert((link_type.to_string(), id.to_string()), record.clone());
            }
        }
    };

    add(response.get("items"), "Entry");
    add(response.pointer("/includes/Entry"), "Entry");
    add(response.pointer("/includes/Asset"), "Asset");

    index
}

fn link_key(value: &Value) -> Option<LinkKey> {
    let sys = value.get("sys")?;
    if sys.get("type").and_then(Value::as_str) != Some("Link") {
        return None;
    }
    let link_type = sys.get("linkType").and_then(Value::as_str)?;
    let id = sys.get("id").and_then(Value::as_str)?;
    Some((link_type.to_string(), id.to_string()))
}

fn resolve_value(value: &mut Value, index: &HashMap<LinkKey, Value>, depth: usize) {
    if let Some(key) = link_key(value) {
        if depth == 0 {
            return;
        }
        if let Some(target) = index.get(&key) {
            let mut target = target.clone();
            if let Some(fields) = target.get_mut("fields") {
                resolve_value(fields, index, depth - 1);
            }
            *value = target;
        } else {
            tracing::debug!(link_type = %key.0, id = %key.1, "Unresolved CMS link");
        }
        return;
    }

    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                resolve_value(child, index, depth);
            }
        }
        Value::Array(items) => {
            for child in items {
                resolve_value(child, index, depth);
            }
        }
        _ => {}
    }
}
