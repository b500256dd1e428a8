//! Small text helpers shared by the section renderers.

/// Split model or analyst prose into paragraphs on blank lines.
pub(crate) fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

/// `"a"`, `"a and b"`, `"a, b and c"`.
pub(crate) fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Cross-reference to numbered paragraphs: `"paragraph 4.1.1 and paragraph 4.1.3"`.
pub(crate) fn cite_paragraphs(numbers: &[String]) -> String {
    let cited: Vec<String> = numbers.iter().map(|n| format!("paragraph {n}")).collect();
    join_list(&cited)
}

/// Upper-case the first character.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Ensure the sentence ends with terminal punctuation.
pub(crate) fn sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}
