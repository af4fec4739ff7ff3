use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the checks as they appear in reports
pub const ALIGNMENT_TEST: &str = "Alinhamento label";
pub const TAB_ORDER_TEST: &str = "Ordem de tabulação";
pub const SPELLING_TEST: &str = "Ortografia";
pub const ACCESSIBILITY_TEST: &str = "Acessibilidade";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestOutcome {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl TestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestOutcome::Pass => "PASS",
            TestOutcome::Fail => "FAIL",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestOutcome::Pass)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check on one field. Never modified once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub test: String,
    pub result: TestOutcome,
    pub details: String,
}

impl TestResult {
    pub fn pass(test: &str, details: impl Into<String>) -> Self {
        Self {
            test: test.to_string(),
            result: TestOutcome::Pass,
            details: details.into(),
        }
    }

    pub fn fail(test: &str, details: impl Into<String>) -> Self {
        Self {
            test: test.to_string(),
            result: TestOutcome::Fail,
            details: details.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.result.is_pass()
    }
}
