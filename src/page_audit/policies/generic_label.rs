use crate::page_audit::domain::{TestResult, ACCESSIBILITY_TEST};

/// Decides whether a field label is a synthesized placeholder rather than
/// real accessible text.
///
/// Generic labels are produced by extraction itself: `"sem texto N"` for
/// buttons without text and `"Campo N"` for inputs without any label or
/// placeholder. Such fields get an accessibility failure instead of a
/// spelling check.
pub struct GenericLabelPolicy;

impl GenericLabelPolicy {
    const UNTEXTED_BUTTON_PREFIX: &'static str = "sem texto";
    const UNLABELED_INPUT_PREFIX: &'static str = "campo ";

    /// Synthetic label for the `index`-th (1-based) button without text
    pub fn untexted_button(index: usize) -> String {
        format!("sem texto {}", index)
    }

    /// Synthetic label for the `index`-th (1-based) input without a label
    pub fn unlabeled_input(index: usize) -> String {
        format!("Campo {}", index)
    }

    pub fn is_generic(label: &str) -> bool {
        let lowered = label.to_lowercase();

        if lowered.trim().is_empty() {
            return true;
        }

        if lowered.starts_with(Self::UNTEXTED_BUTTON_PREFIX) {
            return true;
        }

        // "Campo N" with nothing else around it
        lowered
            .strip_prefix(Self::UNLABELED_INPUT_PREFIX)
            .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false)
    }

    pub fn missing_label_result() -> TestResult {
        TestResult::fail(
            ACCESSIBILITY_TEST,
            "component without textual label or accessible description",
        )
    }
}
