//! Repair mode for truncated containers.
//!
//! Re-runs the bracket scan over a container that never closes and keeps
//! every top-level element (array) or member (object) that was completed
//! before the text ran out. Exactly the final incomplete element is
//! discarded.
//!
//! One refinement applies to objects: when the truncated final member of a
//! top-level object holds an array (`{"items": [{..}, {..}, {`), that array
//! is repaired the same way and the member is kept.

use serde_json::{Map, Value};

use crate::scanner::{ScanState, Scanner, Step};

/// Outcome of a successful repair.
#[derive(Debug, Clone, PartialEq)]
pub struct Repair {
    pub value: Value,
    /// Elements or members recovered at the top level.
    pub kept: usize,
    /// Elements or members dropped, including the final incomplete one.
    pub dropped: usize,
}

/// Repair the truncated container opening at `start`.
///
/// Returns `None` if the byte at `start` is not `{` or `[`, if the container
/// is actually closed, if a mismatched closer is found, or if nothing at all
/// could be recovered.
#[must_use]
pub fn repair_truncated(text: &str, start: usize) -> Option<Repair> {
    let open = *text.as_bytes().get(start)?;
    let is_object = match open {
        b'{' => true,
        b'[' => false,
        _ => return None,
    };

    let mut scanner = Scanner::new();
    let mut slices: Vec<Slice> = Vec::new();
    let mut element_start = start + 1;
    let mut colon_at: Option<usize> = None;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        let at = start + offset;
        match scanner.step(*byte) {
            Step::Separator { depth: 1 } => {
                slices.push(Slice {
                    text: &text[element_start..at],
                    colon: colon_at.map(|c| c - element_start),
                });
                element_start = at + 1;
                colon_at = None;
            }
            Step::Colon { depth: 1 } if colon_at.is_none() => colon_at = Some(at),
            Step::Close { depth: 0 } | Step::Mismatch => return None,
            _ => {}
        }
    }

    let mut kept_values = Vec::new();
    let mut dropped = 0usize;
    for slice in &slices {
        match parse_element(slice.text, is_object) {
            Some(element) => kept_values.push(element),
            None => dropped += 1,
        }
    }

    // The tail after the last separator is the final element. It is kept
    // only if it is already syntactically complete.
    let tail = Slice {
        text: &text[element_start..],
        colon: colon_at.map(|c| c - element_start),
    };
    if !tail.text.trim().is_empty() {
        match complete_tail(&tail, &scanner, is_object) {
            Some(element) => kept_values.push(element),
            None => dropped += 1,
        }
    }

    if kept_values.is_empty() {
        return None;
    }

    let kept = kept_values.len();
    let value = if is_object {
        let mut map = Map::new();
        for element in kept_values {
            if let Element::Member(key, value) = element {
                map.insert(key, value);
            }
        }
        Value::Object(map)
    } else {
        Value::Array(
            kept_values
                .into_iter()
                .filter_map(|element| match element {
                    Element::Item(value) => Some(value),
                    Element::Member(..) => None,
                })
                .collect(),
        )
    };

    tracing::debug!(kept, dropped, "repaired truncated container");
    Some(Repair {
        value,
        kept,
        dropped,
    })
}

struct Slice<'a> {
    text: &'a str,
    /// Offset of the member's `:` within `text`, for objects.
    colon: Option<usize>,
}

enum Element {
    Item(Value),
    Member(String, Value),
}

fn parse_element(text: &str, is_object: bool) -> Option<Element> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_object {
        let wrapped = format!("{{{trimmed}}}");
        let map: Map<String, Value> = serde_json::from_str(&wrapped).ok()?;
        let (key, value) = map.into_iter().next()?;
        Some(Element::Member(key, value))
    } else {
        serde_json::from_str(trimmed).ok().map(Element::Item)
    }
}

/// Decide whether the final slice can be kept.
fn complete_tail(tail: &Slice<'_>, scanner: &Scanner, is_object: bool) -> Option<Element> {
    let trimmed = tail.text.trim_end();
    let settled = scanner.state() == ScanState::Outside && scanner.depth() == 1;
    let ends_cleanly = trimmed.ends_with(['}', ']', '"']);
    if settled && ends_cleanly {
        if let Some(element) = parse_element(trimmed, is_object) {
            return Some(element);
        }
    }

    if is_object {
        return repair_member_array(tail);
    }
    None
}

/// Salvage `"key": [ ...truncated` by repairing the array value.
fn repair_member_array(tail: &Slice<'_>) -> Option<Element> {
    let colon = tail.colon?;
    let key: String = serde_json::from_str(tail.text[..colon].trim()).ok()?;
    let value_text = &tail.text[colon + 1..];
    let array_start = colon + 1 + (value_text.len() - value_text.trim_start().len());
    if !tail.text[array_start..].starts_with('[') {
        return None;
    }
    let inner = repair_truncated(tail.text, array_start)?;
    Some(Element::Member(key, inner.value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::repair_truncated;

    #[test]
    fn drops_final_incomplete_array_element() {
        let repair = repair_truncated(r#"[{"a":1},{"a":2},{"a":3"#, 0).unwrap();
        assert_eq!(repair.value, json!([{"a": 1}, {"a": 2}]));
        assert_eq!(repair.kept, 2);
        assert_eq!(repair.dropped, 1);
    }

    #[test]
    fn keeps_complete_final_element_without_separator() {
        let repair = repair_truncated(r#"[{"a":1},{"a":2}"#, 0).unwrap();
        assert_eq!(repair.value, json!([{"a": 1}, {"a": 2}]));
        assert_eq!(repair.dropped, 0);
    }

    #[test]
    fn trailing_number_is_treated_as_incomplete() {
        let repair = repair_truncated("[10, 20, 3", 0).unwrap();
        assert_eq!(repair.value, json!([10, 20]));
    }

    #[test]
    fn commas_inside_nested_values_are_not_separators() {
        let text = r#"[{"tags": ["x", "y"], "n": "a, b"}, {"tags": ["z""#;
        let repair = repair_truncated(text, 0).unwrap();
        assert_eq!(repair.value, json!([{"tags": ["x", "y"], "n": "a, b"}]));
    }

    #[test]
    fn object_members_are_recovered() {
        let text = r#"{"title": "Lack of oversight", "category": "organization", "descr"#;
        let repair = repair_truncated(text, 0).unwrap();
        assert_eq!(
            repair.value,
            json!({"title": "Lack of oversight", "category": "organization"})
        );
    }

    #[test]
    fn truncated_array_inside_object_is_repaired() {
        let text = r#"{"summary": "ok", "findings": [{"s": 1}, {"s": 2}, {"s""#;
        let repair = repair_truncated(text, 0).unwrap();
        assert_eq!(
            repair.value,
            json!({"summary": "ok", "findings": [{"s": 1}, {"s": 2}]})
        );
    }

    #[test]
    fn nothing_recoverable_is_none() {
        assert!(repair_truncated(r#"[{"a":"#, 0).is_none());
    }

    #[test]
    fn closed_container_is_not_repaired() {
        assert!(repair_truncated("[1, 2]", 0).is_none());
    }
}
