use crate::page_audit::domain::{Document, ElementData, NodeId, TestResult, TAB_ORDER_TEST};

/// Page-wide tab order check.
///
/// Walks the keyboard-reachable elements in document order and requires
/// their `tabIndex` values to never decrease.
pub struct TabOrderChecker;

impl TabOrderChecker {
    /// Focusable, enabled, laid-out elements with a non-negative tab index,
    /// in document order.
    pub fn tabbable_elements(doc: &Document) -> Vec<NodeId> {
        doc.elements()
            .filter(|&id| doc.element(id).map(Self::is_tabbable).unwrap_or(false))
            .collect()
    }

    fn is_candidate(element: &ElementData) -> bool {
        let native = match element.tag() {
            "a" => element.has_attr("href"),
            "button" | "input" | "select" | "textarea" => true,
            _ => false,
        };
        native || element.attr("tabindex").map(|v| v.trim() != "-1").unwrap_or(false)
    }

    fn is_tabbable(element: &ElementData) -> bool {
        Self::is_candidate(element)
            && !element.is_disabled()
            && element.tab_index() >= 0
            && element.has_offset_parent()
    }

    pub fn check(doc: &Document) -> TestResult {
        let indices: Vec<i32> = Self::tabbable_elements(doc)
            .into_iter()
            .filter_map(|id| doc.element(id).map(ElementData::tab_index))
            .collect();
        Self::check_sequence(&indices)
    }

    pub fn check_sequence(tab_indices: &[i32]) -> TestResult {
        if tab_indices.windows(2).all(|pair| pair[0] <= pair[1]) {
            TestResult::pass(TAB_ORDER_TEST, "correct tab order")
        } else {
            TestResult::fail(TAB_ORDER_TEST, "tab order inconsistencies")
        }
    }
}
