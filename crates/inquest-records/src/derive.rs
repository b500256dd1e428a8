//! Findings derived deterministically from the sequence of events.
//!
//! Used when no findings were supplied, so the report still has a Findings
//! section with positional paragraphs the analysis can cite.

use inquest_core::entities::{Finding, TimelineEntry};

/// One finding per timeline entry, ordered by time.
///
/// Entries with an unknown time sort last; ties keep input order.
#[must_use]
pub fn findings_from_timeline(timeline: &[TimelineEntry]) -> Vec<Finding> {
    let mut ordered: Vec<&TimelineEntry> = timeline.iter().collect();
    // `None < Some`, so flip the option to push unknown times to the end.
    ordered.sort_by_key(|entry| (entry.timestamp.is_none(), entry.timestamp));

    ordered
        .into_iter()
        .map(|entry| Finding {
            id: format!("F-{}", entry.id),
            statement: statement_for(entry),
            evidence_support: entry.evidence_ids.clone(),
            timeline_refs: vec![entry.id.clone()],
        })
        .collect()
}

fn statement_for(entry: &TimelineEntry) -> String {
    let description = entry.description.trim_end_matches(['.', ' ']);
    entry.time_label().map_or_else(
        || format!("At an unknown time, {description}."),
        |label| format!("On {label}, {description}."),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use inquest_core::enums::TimelineKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, hour: Option<u32>, description: &str) -> TimelineEntry {
        TimelineEntry {
            id: id.to_string(),
            timestamp: hour.and_then(|h| {
                NaiveDate::from_ymd_opt(2024, 3, 14).and_then(|d| d.and_hms_opt(h, 0, 0))
            }),
            kind: TimelineKind::Event,
            description: description.to_string(),
            is_initiating_event: false,
            evidence_ids: vec![format!("EV-{id}")],
        }
    }

    #[test]
    fn sorted_by_time_with_unknown_last() {
        let timeline = vec![
            entry("TL-1", None, "Crew reported smoke"),
            entry("TL-2", Some(11), "Aircraft diverted"),
            entry("TL-3", Some(9), "Aircraft departed."),
            entry("TL-4", None, "Cabin was evacuated"),
        ];
        let findings = findings_from_timeline(&timeline);
        let ids: Vec<&str> = findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["F-TL-3", "F-TL-2", "F-TL-1", "F-TL-4"]);
    }

    #[test]
    fn statements_carry_the_time() {
        let findings = findings_from_timeline(&[
            entry("TL-1", Some(9), "Aircraft departed."),
            entry("TL-2", None, "Crew reported smoke"),
        ]);
        assert_eq!(findings[0].statement, "On 14 March 2024 at 09:00, Aircraft departed.");
        assert_eq!(findings[1].statement, "At an unknown time, Crew reported smoke.");
        assert_eq!(findings[0].timeline_refs, vec!["TL-1"]);
        assert_eq!(findings[0].evidence_support, vec!["EV-TL-1"]);
    }
}
