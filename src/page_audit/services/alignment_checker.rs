use crate::page_audit::domain::{Rect, TestResult, ALIGNMENT_TEST};

/// Centroid-based check that a label sits next to its field.
///
/// A pair is aligned when the vertical centers are within the tolerance
/// (label beside the field) or the horizontal centers are (label above or
/// below the field).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentChecker {
    tolerance: f64,
}

impl AlignmentChecker {
    pub const DEFAULT_TOLERANCE: f64 = 15.0;

    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn is_aligned(&self, field: &Rect, label: &Rect) -> bool {
        let beside = (field.center_y() - label.center_y()).abs() <= self.tolerance;
        let stacked = (field.center_x() - label.center_x()).abs() <= self.tolerance;
        beside || stacked
    }

    /// `field` is `None` (or non-finite) when the field box could not be read.
    pub fn check(
        &self,
        field: Option<&Rect>,
        label: Option<&Rect>,
        has_accessible_description: bool,
    ) -> TestResult {
        let field = match field {
            Some(rect) if rect.is_finite() => rect,
            _ => return TestResult::fail(ALIGNMENT_TEST, "invalid field"),
        };

        match label {
            Some(label) if self.is_aligned(field, label) => {
                TestResult::pass(ALIGNMENT_TEST, "label close and visually aligned to field")
            }
            Some(_) => TestResult::fail(ALIGNMENT_TEST, "label distant or misaligned"),
            None if has_accessible_description => TestResult::pass(
                ALIGNMENT_TEST,
                "field without <label>, but has an alternative description (placeholder/aria)",
            ),
            None => TestResult::fail(ALIGNMENT_TEST, "no accessible label or description"),
        }
    }
}

impl Default for AlignmentChecker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}
