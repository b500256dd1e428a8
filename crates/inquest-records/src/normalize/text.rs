//! Free-text sanitization and title grammar.

use inquest_core::entities::{has_negative_phrasing, negative_prefix};

/// Prefix used when a title has to be rewritten into negative form.
pub(crate) const REWRITE_PREFIX: &str = "Failure of";

/// Strip control characters, fold newlines and tabs into spaces, collapse
/// runs of whitespace, and trim.
pub(crate) fn sanitize_line(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`sanitize_line`] per line, but keeps paragraph structure: single
/// line breaks survive and runs of blank lines collapse to one.
pub(crate) fn sanitize_block(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;
    for line in text.replace("\r\n", "\n").split('\n') {
        let clean = sanitize_line(line);
        if clean.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push_str(if pending_blank { "\n\n" } else { "\n" });
        }
        out.push_str(&clean);
        pending_blank = false;
    }
    out
}

/// First sentence of `text`, without its terminal punctuation.
pub(crate) fn first_sentence(text: &str) -> String {
    let line = sanitize_line(text);
    let end = line
        .char_indices()
        .find(|(i, c)| {
            matches!(c, '.' | '!' | '?')
                && line[i + c.len_utf8()..]
                    .chars()
                    .next()
                    .is_none_or(char::is_whitespace)
        })
        .map_or(line.len(), |(i, _)| i);
    line[..end].trim().to_string()
}

/// Words such as `ATC`, `EGPWS` or `A320` keep their case.
fn is_acronym(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    letters > 0
        && (letters > 1 || word.chars().any(|c| c.is_ascii_digit()))
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Lower-case every word except acronyms.
fn lower_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if is_acronym(word) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bring `title` into negative form. Returns the title and whether it was
/// rewritten.
pub(crate) fn enforce_negative_phrasing(title: &str) -> (String, bool) {
    if has_negative_phrasing(title) {
        return (title.to_string(), false);
    }
    (format!("{REWRITE_PREFIX} {}", lower_words(title)), true)
}

/// Cap `title` at `max_chars`, cutting on a word boundary where possible.
/// A boundary that would leave only the grammar prefix is not used; the
/// title is cut mid-word instead. Returns the title and whether it was
/// shortened.
pub(crate) fn cap_title(title: &str, max_chars: usize) -> (String, bool) {
    if title.chars().count() <= max_chars {
        return (title.to_string(), false);
    }
    let cut: String = title.chars().take(max_chars).collect();
    if let Some(space) = cut.rfind(' ').filter(|space| *space > 0) {
        let at_word = trim_tail(&cut[..space]);
        if names_subject(at_word) {
            return (at_word.to_string(), true);
        }
    }
    (trim_tail(&cut).to_string(), true)
}

fn trim_tail(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'))
}

/// Whether anything follows the negative prefix, if there is one.
fn names_subject(title: &str) -> bool {
    let trimmed = title.trim_start();
    match negative_prefix(trimmed) {
        Some(prefix) => !trimmed[prefix.len()..].trim().is_empty(),
        None => !trimmed.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sanitize_line_collapses_whitespace_and_controls() {
        assert_eq!(sanitize_line("  Crew\tdid\u{0007} not\n\ncheck  "), "Crew did not check");
    }

    #[test]
    fn sanitize_block_keeps_paragraphs() {
        assert_eq!(
            sanitize_block("First line\r\nsecond   line\n\n\n\nNew para  \n"),
            "First line\nsecond line\n\nNew para"
        );
    }

    #[test]
    fn first_sentence_ignores_decimal_points() {
        assert_eq!(
            first_sentence("Fuel fell below 2.5 tonnes. The crew noticed late."),
            "Fuel fell below 2.5 tonnes"
        );
    }

    #[test]
    fn rewrite_lower_cases_first_letter() {
        assert_eq!(
            enforce_negative_phrasing("Crew did not check gauges"),
            ("Failure of crew did not check gauges".to_string(), true)
        );
    }

    #[test]
    fn rewrite_lower_cases_every_word() {
        assert_eq!(
            enforce_negative_phrasing("Crew Did Not Check").0,
            "Failure of crew did not check"
        );
    }

    #[test]
    fn rewrite_keeps_acronyms() {
        assert_eq!(
            enforce_negative_phrasing("ATC clearance misread").0,
            "Failure of ATC clearance misread"
        );
        assert_eq!(
            enforce_negative_phrasing("Crew Ignored EGPWS On The A320").0,
            "Failure of crew ignored EGPWS on the A320"
        );
    }

    #[test]
    fn negative_titles_are_left_alone() {
        assert_eq!(
            enforce_negative_phrasing("Lack of fatigue management"),
            ("Lack of fatigue management".to_string(), false)
        );
    }

    #[test]
    fn cap_cuts_on_word_boundary() {
        let (capped, truncated) = cap_title("Failure of the operator to maintain adequate records", 30);
        assert!(truncated);
        assert_eq!(capped, "Failure of the operator to");
        assert!(capped.chars().count() <= 30);
    }

    #[test]
    fn cap_cuts_mid_word_rather_than_leave_only_the_prefix() {
        let title = format!("Failure of {}", "a".repeat(75));
        let (capped, truncated) = cap_title(&title, 80);
        assert!(truncated);
        assert!(capped.starts_with("Failure of a"));
        assert_eq!(capped.chars().count(), 80);
        assert!(names_subject(&capped));
    }

    #[test]
    fn cap_leaves_short_titles() {
        assert_eq!(cap_title("Lack of oversight", 80), ("Lack of oversight".to_string(), false));
    }
}
