//! Code fence stripping.

/// Return the body of the first fenced code block in `text`.
///
/// Accepts both backtick and tilde fences, with or without a language tag,
/// and tolerates commentary before the opening fence. A missing closing
/// fence (truncated output) yields everything after the opening line.
/// Returns `None` when `text` contains no fence.
#[must_use]
pub fn strip_code_fence(text: &str) -> Option<&str> {
    let (open_at, marker) = find_fence(text)?;
    let after_marker = &text[open_at + marker.len()..];

    // The rest of the opening line is the language tag (possibly empty).
    let body_start = match after_marker.find('\n') {
        Some(newline) => open_at + marker.len() + newline + 1,
        None => {
            // Single-line fence: ```{"a":1}```
            let inner = after_marker.strip_suffix(marker).unwrap_or(after_marker);
            return Some(inner.trim());
        }
    };

    let body = &text[body_start..];
    let body = match closing_fence(body, marker) {
        Some(close_at) => &body[..close_at],
        None => body,
    };
    Some(body.trim())
}

fn find_fence(text: &str) -> Option<(usize, &'static str)> {
    ["```", "~~~"]
        .into_iter()
        .filter_map(|marker| text.find(marker).map(|at| (at, marker)))
        .min_by_key(|(at, _)| *at)
}

/// Offset of a closing fence that starts a line (or the body itself).
fn closing_fence(body: &str, marker: &str) -> Option<usize> {
    if body.starts_with(marker) {
        return Some(0);
    }
    body.match_indices(marker)
        .map(|(at, _)| at)
        .find(|at| body[..*at].trim_end_matches([' ', '\t']).ends_with('\n'))
}
