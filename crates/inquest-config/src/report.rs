//! Report assembly settings.

use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Investigation Report".to_string()
}

/// Text substituted wherever neither enrichment nor data is available.
fn default_placeholder() -> String {
    "To be determined".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Document title rendered above section 1.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Validation failures tolerated before a host should refuse to emit.
    /// `None` means no limit.
    #[serde(default)]
    pub max_failures: Option<u32>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            max_failures: None,
        }
    }
}

impl ReportConfig {
    /// Whether `failures` exceeds the configured limit.
    #[must_use]
    pub fn exceeds_failure_limit(&self, failures: usize) -> bool {
        self.max_failures
            .is_some_and(|limit| failures > limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReportConfig::default();
        assert_eq!(config.title, "Investigation Report");
        assert_eq!(config.placeholder, "To be determined");
        assert!(config.max_failures.is_none());
    }

    #[test]
    fn failure_limit_is_exclusive() {
        let config = ReportConfig {
            max_failures: Some(2),
            ..ReportConfig::default()
        };
        assert!(!config.exceeds_failure_limit(2));
        assert!(config.exceeds_failure_limit(3));
        assert!(!ReportConfig::default().exceeds_failure_limit(100));
    }
}
