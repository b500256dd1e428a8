//! Alias-aware field access on one raw element.

use serde_json::{Map, Value};

use super::text::{sanitize_block, sanitize_line};

/// Read-only view over a raw JSON object.
pub(crate) struct RawRecord<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    pub(crate) const fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// First key present with a non-null value.
    pub(crate) fn raw(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find(|value| !value.is_null())
    }

    /// Single-line text: newlines folded into spaces. Empty results are `None`.
    pub(crate) fn line(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.map.get(*key).and_then(scalar_text))
            .map(|text| sanitize_line(&text))
            .find(|text| !text.is_empty())
    }

    /// Multi-line text: paragraph breaks kept. Empty results are `None`.
    pub(crate) fn block(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.map.get(*key).and_then(scalar_text))
            .map(|text| sanitize_block(&text))
            .find(|text| !text.is_empty())
    }

    /// A list of ids. Accepts an array of strings/numbers or a single
    /// comma-separated string. Blanks and duplicates are dropped.
    pub(crate) fn ids(&self, keys: &[&str]) -> Vec<String> {
        let Some(value) = self.raw(keys) else {
            return Vec::new();
        };
        let candidates: Vec<String> = match value {
            Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
            Value::String(joined) => joined.split([',', ';']).map(str::to_string).collect(),
            other => scalar_text(other).into_iter().collect(),
        };

        let mut ids: Vec<String> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let id = sanitize_line(&candidate);
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// A boolean flag. Accepts JSON booleans and common string spellings.
    pub(crate) fn flag(&self, keys: &[&str]) -> Option<bool> {
        match self.raw(keys)? {
            Value::Bool(flag) => Some(*flag),
            Value::Number(n) => n.as_i64().map(|n| n != 0),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Some(true),
                "false" | "no" | "n" | "0" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Text form of a scalar value. Containers have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
