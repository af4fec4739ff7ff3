use super::geometry::Rect;
use super::test_result::TestResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Input,
    Button,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Input => "input",
            FieldKind::Button => "button",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the DOM attributes of a field taken at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMeta {
    pub id: Option<String>,
    pub tab_index: i32,
    pub disabled: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub aria_labelled_by: Option<String>,
}

impl ElementMeta {
    /// aria-label, aria-labelledby or placeholder is present
    pub fn has_accessible_description(&self) -> bool {
        self.aria_label.is_some() || self.aria_labelled_by.is_some() || self.placeholder.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub rect: Rect,
    pub tests: Vec<TestResult>,
    pub element: ElementMeta,
    /// Layout box of the resolved label element, kept for re-verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_rect: Option<Rect>,
}

impl Field {
    pub fn button(label: String, rect: Rect, element: ElementMeta) -> Self {
        Self {
            kind: FieldKind::Button,
            label,
            rect,
            tests: Vec::new(),
            element,
            label_rect: None,
        }
    }

    pub fn input(
        label: String,
        rect: Rect,
        element: ElementMeta,
        label_rect: Option<Rect>,
        alignment: TestResult,
    ) -> Self {
        Self {
            kind: FieldKind::Input,
            label,
            rect,
            tests: vec![alignment],
            element,
            label_rect,
        }
    }

    /// Results are append-only.
    pub fn push_test(&mut self, result: TestResult) {
        self.tests.push(result);
    }

    pub fn find_test(&self, name: &str) -> Option<&TestResult> {
        self.tests.iter().find(|t| t.test == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub title: String,
    pub fields: Vec<Field>,
}

impl Component {
    pub fn new(title: String, fields: Vec<Field>) -> Self {
        Self { title, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_audit::domain::test_result::{TestResult, ALIGNMENT_TEST};

    #[test]
    fn test_field_serializes_with_type_key() {
        let field = Field::button(
            "Enviar".to_string(),
            Rect::new(0.0, 0.0, 80.0, 30.0),
            ElementMeta {
                id: Some("send".to_string()),
                tab_index: 0,
                ..ElementMeta::default()
            },
        );
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "button");
        assert_eq!(value["element"]["tabIndex"], 0);
        assert_eq!(value["element"]["ariaLabelledBy"], serde_json::Value::Null);
        assert!(value.get("labelRect").is_none());
    }

    #[test]
    fn test_input_starts_with_alignment_result() {
        let field = Field::input(
            "Nome".to_string(),
            Rect::default(),
            ElementMeta::default(),
            None,
            TestResult::pass(ALIGNMENT_TEST, "ok"),
        );
        assert_eq!(field.tests.len(), 1);
        assert!(field.find_test(ALIGNMENT_TEST).is_some());
    }

    #[test]
    fn test_accessible_description() {
        let mut meta = ElementMeta::default();
        assert!(!meta.has_accessible_description());
        meta.placeholder = Some("E-mail".to_string());
        assert!(meta.has_accessible_description());
    }
}
