use super::component::Component;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counts over every test result of a set of components.
///
/// Derived data: recomputed from the components whenever a report is built,
/// but kept as stored when a report is loaded back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Percentage with two decimals ("75.00"), or "0" when there are no tests
    pub success_rate: String,
    pub total_components: usize,
    pub total_fields: usize,
}

impl Summary {
    pub fn from_components(components: &[Component]) -> Self {
        let mut total_tests = 0;
        let mut passed_tests = 0;

        for test in components
            .iter()
            .flat_map(|c| c.fields.iter())
            .flat_map(|f| f.tests.iter())
        {
            total_tests += 1;
            if test.is_pass() {
                passed_tests += 1;
            }
        }

        Self {
            total_tests,
            passed_tests,
            failed_tests: total_tests - passed_tests,
            success_rate: success_rate(passed_tests, total_tests),
            total_components: components.len(),
            total_fields: components.iter().map(|c| c.fields.len()).sum(),
        }
    }
}

fn success_rate(passed: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.2}", passed as f64 / total as f64 * 100.0)
}

/// Result of one audit run over one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub components: Vec<Component>,
    pub tabulation_correct: bool,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub summary: Summary,
}

impl Report {
    /// Builds a report and computes its summary from `components`.
    pub fn new(
        components: Vec<Component>,
        tabulation_correct: bool,
        timestamp: DateTime<Utc>,
        url: String,
    ) -> Self {
        let summary = Summary::from_components(&components);
        Self {
            components,
            tabulation_correct,
            timestamp,
            url,
            summary,
        }
    }

    /// Run date as used in export filenames (YYYY-MM-DD)
    pub fn run_date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed_tests > 0
    }
}

/// ISO 8601 timestamps with millisecond precision and a `Z` suffix
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
