use super::alignment_checker::AlignmentChecker;
use super::label_resolver::LabelResolver;
use crate::page_audit::domain::{
    Component, Document, ElementData, ElementMeta, Field, FrameContent, NodeId,
};
use crate::page_audit::policies::GenericLabelPolicy;
use std::collections::HashSet;

/// Components found on a page, plus the frames that could not be entered.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutcome {
    pub components: Vec<Component>,
    /// Origins of cross-origin frames skipped during the walk
    pub skipped_frames: Vec<String>,
    /// Where each input field came from, for later checks against the page
    pub inputs: Vec<InputLocation>,
}

/// DOM position of one extracted input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLocation {
    /// Index into [`ExtractionOutcome::components`]
    pub component: usize,
    /// Index into that component's fields
    pub field: usize,
    /// Frame elements leading from the page document to the field's document
    pub frame_path: Vec<NodeId>,
    pub node: NodeId,
}

/// Walks a document (and its same-origin frames, depth first) collecting
/// form-like containers and their fields.
///
/// Alignment is computed here, while the label geometry is at hand;
/// every other check runs later over the extracted fields.
pub struct ComponentExtractor {
    alignment: AlignmentChecker,
}

impl ComponentExtractor {
    pub fn new(alignment: AlignmentChecker) -> Self {
        Self { alignment }
    }

    pub fn extract(&self, doc: &Document) -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::default();
        self.traverse_frame(doc, &mut Vec::new(), &mut outcome);
        outcome
    }

    fn traverse_frame(
        &self,
        doc: &Document,
        frame_path: &mut Vec<NodeId>,
        outcome: &mut ExtractionOutcome,
    ) {
        let containers = doc
            .elements()
            .filter(|&id| doc.element(id).map(is_container).unwrap_or(false));

        for (index, container) in containers.enumerate() {
            let Some(data) = doc.element(container) else {
                continue;
            };
            if !data.is_visible() {
                continue;
            }
            let (component, input_nodes) = self.extract_component(doc, container, data, index + 1);
            let position = outcome.components.len();
            outcome
                .inputs
                .extend(input_nodes.into_iter().map(|(field, node)| InputLocation {
                    component: position,
                    field,
                    frame_path: frame_path.clone(),
                    node,
                }));
            outcome.components.push(component);
        }

        for (frame, content) in doc.frames() {
            match content {
                FrameContent::Accessible(frame_doc) => {
                    frame_path.push(frame);
                    self.traverse_frame(frame_doc, frame_path, outcome);
                    frame_path.pop();
                }
                FrameContent::Denied { origin } => outcome.skipped_frames.push(origin.clone()),
            }
        }
    }

    fn extract_component(
        &self,
        doc: &Document,
        container: NodeId,
        data: &ElementData,
        position: usize,
    ) -> (Component, Vec<(usize, NodeId)>) {
        let title = data
            .non_empty_attr("name")
            .or_else(|| data.id())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Componente {}", position));

        let descendants = doc.descendants(container);
        let mut fields = self.collect_buttons(doc, &descendants);
        let mut input_nodes = Vec::new();
        for (node, field) in self.collect_inputs(doc, &descendants) {
            input_nodes.push((fields.len(), node));
            fields.push(field);
        }

        (Component::new(title, fields), input_nodes)
    }

    fn collect_buttons(&self, doc: &Document, scope: &[NodeId]) -> Vec<Field> {
        let mut seen = HashSet::new();
        let mut fields = Vec::new();

        let buttons = scope
            .iter()
            .copied()
            .filter(|&id| doc.element(id).map(is_button).unwrap_or(false));

        for (index, button) in buttons.enumerate() {
            let Some(data) = doc.element(button) else {
                continue;
            };
            if !data.is_visible() {
                continue;
            }

            let text = doc.inner_text(button);
            let label = if text.is_empty() {
                GenericLabelPolicy::untexted_button(index + 1)
            } else {
                text
            };

            if !seen.insert(label.clone()) {
                continue;
            }

            fields.push(Field::button(
                label,
                *data.rect(),
                ElementMeta {
                    id: data.id().map(str::to_string),
                    tab_index: data.tab_index(),
                    disabled: data.is_disabled(),
                    ..ElementMeta::default()
                },
            ));
        }

        fields
    }

    fn collect_inputs(&self, doc: &Document, scope: &[NodeId]) -> Vec<(NodeId, Field)> {
        let inputs = scope
            .iter()
            .copied()
            .filter(|&id| doc.element(id).map(is_text_control).unwrap_or(false));

        let mut fields = Vec::new();
        for (index, input) in inputs.enumerate() {
            let Some(data) = doc.element(input) else {
                continue;
            };
            if !data.is_visible() {
                continue;
            }

            let resolved = LabelResolver::resolve(doc, input, index + 1);
            let label_rect = resolved
                .element
                .and_then(|label| doc.element(label))
                .map(|label| *label.rect());

            let alignment = self.alignment.check(
                Some(data.rect()),
                label_rect.as_ref(),
                resolved.has_accessible_description(),
            );

            let element = ElementMeta {
                id: data.id().map(str::to_string),
                tab_index: data.tab_index(),
                disabled: data.is_disabled(),
                read_only: data.is_read_only(),
                placeholder: resolved.placeholder,
                aria_label: resolved.aria_label,
                aria_labelled_by: resolved.aria_labelled_by,
            };

            fields.push((
                input,
                Field::input(resolved.text, *data.rect(), element, label_rect, alignment),
            ));
        }

        fields
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        Self::new(AlignmentChecker::default())
    }
}

/// forms, `role="form"`, `div.component-container`, `.form-group`, fieldsets
fn is_container(element: &ElementData) -> bool {
    element.tag() == "form"
        || element.role() == Some("form")
        || (element.tag() == "div" && element.has_class("component-container"))
        || element.has_class("form-group")
        || element.tag() == "fieldset"
}

fn is_button(element: &ElementData) -> bool {
    element.tag() == "button" || element.role() == Some("button")
}

fn is_text_control(element: &ElementData) -> bool {
    matches!(element.tag(), "input" | "textarea" | "select") || element.role() == Some("textbox")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_audit::domain::{
        FieldKind, SnapshotElement, TestOutcome, ALIGNMENT_TEST,
    };
    use serde_json::json;

    fn document(value: serde_json::Value) -> Document {
        let root: SnapshotElement = serde_json::from_value(value).unwrap();
        Document::from_snapshot(&root)
    }

    fn rect(top: f64, left: f64, width: f64, height: f64) -> serde_json::Value {
        json!({"top": top, "left": left, "width": width, "height": height})
    }

    #[test]
    fn test_login_form() {
        let doc = document(json!({
            "tag": "body",
            "children": [{
                "tag": "form",
                "attributes": {"name": "login"},
                "children": [
                    {"tag": "label", "attributes": {"for": "user"}, "rect": rect(100.0, 10.0, 60.0, 20.0), "children": ["Usuário"]},
                    {"tag": "input", "attributes": {"id": "user"}, "rect": rect(95.0, 80.0, 200.0, 30.0)},
                    {"tag": "button", "rect": rect(140.0, 80.0, 80.0, 30.0), "children": ["Entrar"]}
                ]
            }]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        assert_eq!(outcome.components.len(), 1);
        assert!(outcome.skipped_frames.is_empty());

        let component = &outcome.components[0];
        assert_eq!(component.title, "login");
        assert_eq!(component.fields.len(), 2);

        // buttons are collected before inputs
        let button = &component.fields[0];
        assert_eq!(button.kind, FieldKind::Button);
        assert_eq!(button.label, "Entrar");
        assert!(button.tests.is_empty());

        let input = &component.fields[1];
        assert_eq!(input.kind, FieldKind::Input);
        assert_eq!(input.label, "Usuário");
        assert_eq!(input.element.id.as_deref(), Some("user"));
        let alignment = input.find_test(ALIGNMENT_TEST).unwrap();
        assert_eq!(alignment.result, TestOutcome::Pass);
        assert!(input.label_rect.is_some());
    }

    #[test]
    fn test_container_titles_and_visibility() {
        let doc = document(json!({
            "tag": "body",
            "children": [
                {"tag": "form", "style": {"display": "none"}},
                {"tag": "div", "attributes": {"class": "component-container"}},
                {"tag": "section", "attributes": {"role": "form", "id": "busca"}},
                {"tag": "div", "attributes": {"class": "card"}}
            ]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        let titles: Vec<&str> = outcome.components.iter().map(|c| c.title.as_str()).collect();
        // numbering counts the hidden form too
        assert_eq!(titles, vec!["Componente 2", "busca"]);
    }

    #[test]
    fn test_buttons_deduplicated_by_text() {
        let doc = document(json!({
            "tag": "form",
            "children": [
                {"tag": "button", "attributes": {"id": "first"}, "children": [" Salvar "]},
                {"tag": "button", "attributes": {"id": "second"}, "children": ["Salvar"]},
                {"tag": "button", "style": {"visibility": "hidden"}},
                {"tag": "button"},
                {"tag": "div", "attributes": {"role": "button"}, "children": ["Cancelar"]}
            ]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        let fields = &outcome.components[0].fields;
        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Salvar", "sem texto 4", "Cancelar"]);
        assert_eq!(fields[0].element.id.as_deref(), Some("first"));
    }

    #[test]
    fn test_unlabeled_inputs() {
        let doc = document(json!({
            "tag": "form",
            "children": [
                {"tag": "input", "attributes": {"type": "hidden"}, "hasOffsetParent": false},
                {"tag": "p", "children": [{"tag": "input", "attributes": {"readonly": ""}}]},
                {"tag": "p", "children": [{"tag": "textarea", "attributes": {"aria-label": "Comentário"}}]}
            ]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        let fields = &outcome.components[0].fields;
        assert_eq!(fields.len(), 2);

        assert_eq!(fields[0].label, "Campo 2");
        assert!(fields[0].element.read_only);
        assert_eq!(fields[0].tests[0].details, "no accessible label or description");

        assert_eq!(fields[1].label, "Campo 3");
        assert_eq!(fields[1].element.aria_label.as_deref(), Some("Comentário"));
        assert!(fields[1].tests[0].is_pass());
    }

    #[test]
    fn test_nested_containers_each_produce_a_component() {
        let doc = document(json!({
            "tag": "form",
            "attributes": {"id": "cadastro"},
            "children": [{
                "tag": "fieldset",
                "children": [{"tag": "input", "attributes": {"placeholder": "Nome"}}]
            }]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        assert_eq!(outcome.components.len(), 2);
        assert_eq!(outcome.components[0].title, "cadastro");
        assert_eq!(outcome.components[1].title, "Componente 2");
        assert_eq!(outcome.components[0].fields[0].label, "Nome");
        assert_eq!(outcome.components[1].fields[0].label, "Nome");
    }

    #[test]
    fn test_input_locations_point_back_into_the_page() {
        let doc = document(json!({
            "tag": "body",
            "children": [
                {"tag": "form", "attributes": {"id": "main"}, "children": [
                    {"tag": "button", "children": ["Ok"]},
                    {"tag": "input", "attributes": {"id": "top", "placeholder": "Busca"}}
                ]},
                {"tag": "iframe", "attributes": {"id": "frame"}, "frame": {"access": "same-origin", "document": {
                    "tag": "form",
                    "children": [{"tag": "input", "attributes": {"id": "inner", "placeholder": "E-mail"}}]
                }}}
            ]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        assert_eq!(outcome.inputs.len(), 2);

        let top = &outcome.inputs[0];
        assert_eq!((top.component, top.field), (0, 1));
        assert!(top.frame_path.is_empty());
        assert_eq!(doc.element(top.node).unwrap().id(), Some("top"));

        let inner = &outcome.inputs[1];
        assert_eq!((inner.component, inner.field), (1, 0));
        let frame_doc = doc.frame_document(&inner.frame_path).unwrap();
        assert_eq!(frame_doc.element(inner.node).unwrap().id(), Some("inner"));
    }

    #[test]
    fn test_frames_are_walked_depth_first() {
        let doc = document(json!({
            "tag": "body",
            "children": [
                {"tag": "iframe", "frame": {"access": "cross-origin", "origin": "https://ads.example"}},
                {"tag": "iframe", "frame": {"access": "same-origin", "document": {
                    "tag": "body",
                    "children": [
                        {"tag": "form", "attributes": {"id": "newsletter"}},
                        {"tag": "iframe", "frame": {"access": "same-origin", "document": {
                            "tag": "form", "attributes": {"id": "deep"}
                        }}}
                    ]
                }}},
                {"tag": "form", "attributes": {"id": "main"}}
            ]
        }));

        let outcome = ComponentExtractor::default().extract(&doc);
        let titles: Vec<&str> = outcome.components.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["main", "newsletter", "deep"]);
        assert_eq!(outcome.skipped_frames, vec!["https://ads.example".to_string()]);
    }
}
