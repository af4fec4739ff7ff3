use crate::page_audit::domain::{Document, ElementData, NodeId, Rect};
use crate::page_audit::policies::GenericLabelPolicy;

/// A label lookup strategy: field in, label element out.
pub type LabelStrategy = fn(&Document, NodeId) -> Option<NodeId>;

/// Label of a field after running the resolution chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLabel {
    /// Label element found by one of the strategies
    pub element: Option<NodeId>,
    pub aria_label: Option<String>,
    pub aria_labelled_by: Option<String>,
    pub placeholder: Option<String>,
    /// Text used by downstream checks
    pub text: String,
}

impl ResolvedLabel {
    /// A label element or any of the aria/placeholder fallbacks
    pub fn has_accessible_description(&self) -> bool {
        self.aria_label.is_some() || self.aria_labelled_by.is_some() || self.placeholder.is_some()
    }
}

/// Finds the best descriptive label for a form field.
pub struct LabelResolver;

impl LabelResolver {
    /// Strategies in priority order; the first hit wins.
    pub const STRATEGIES: [(&'static str, LabelStrategy); 4] = [
        ("explicit-for", Self::explicit_for),
        ("wrapping-label", Self::wrapping_label),
        ("preceding-sibling", Self::preceding_sibling),
        ("group-label", Self::group_label),
    ];

    pub fn find_label_element(doc: &Document, field: NodeId) -> Option<NodeId> {
        Self::STRATEGIES
            .iter()
            .find_map(|(_, strategy)| strategy(doc, field))
    }

    /// Runs the chain for `field`. `index` is the 1-based position of the
    /// field among the inputs of its component, used for the generic label.
    pub fn resolve(doc: &Document, field: NodeId, index: usize) -> ResolvedLabel {
        let element = Self::find_label_element(doc, field);
        let data = doc.element(field);
        let attr = |name: &str| {
            data.and_then(|d| d.non_empty_attr(name))
                .map(str::to_string)
        };

        let aria_label = attr("aria-label");
        let aria_labelled_by = attr("aria-labelledby");
        let placeholder = attr("placeholder");

        let text = match element {
            Some(label) => Self::label_text(doc, label),
            None => placeholder
                .clone()
                .unwrap_or_else(|| GenericLabelPolicy::unlabeled_input(index)),
        };

        ResolvedLabel {
            element,
            aria_label,
            aria_labelled_by,
            placeholder,
            text,
        }
    }

    /// Trimmed rendered text of a label with a trailing required marker
    /// (`" *"`) removed.
    pub fn label_text(doc: &Document, label: NodeId) -> String {
        let text = doc.inner_text(label);
        let trimmed = text.trim();
        match trimmed.strip_suffix('*') {
            Some(rest) => rest.trim_end().to_string(),
            None => trimmed.to_string(),
        }
    }

    /// `<label for="...">` anywhere in the document matching the field id
    pub fn explicit_for(doc: &Document, field: NodeId) -> Option<NodeId> {
        let id = doc.element(field)?.id()?;
        Self::label_for_id(doc, id)
    }

    /// Label geometry as seen by the post-extraction alignment check.
    ///
    /// This is a narrower lookup than [`LabelResolver::find_label_element`]:
    /// `label[for]` is searched in the page document even for fields inside
    /// frames, the wrapping label comes next, and the preceding sibling is
    /// accepted by tag alone, visible or not. The group label is not tried.
    /// `field` lives in `doc`, which is `page` itself or one of its frames.
    pub fn recheck_label_rect(page: &Document, doc: &Document, field: NodeId) -> Option<Rect> {
        let by_id = doc
            .element(field)?
            .id()
            .and_then(|id| Self::label_for_id(page, id))
            .and_then(|label| page.element(label));
        if let Some(label) = by_id {
            return Some(*label.rect());
        }

        Self::wrapping_label(doc, field)
            .or_else(|| {
                doc.previous_element_sibling(field)
                    .filter(|&prev| doc.element(prev).map(Self::is_label_like).unwrap_or(false))
            })
            .and_then(|label| doc.element(label))
            .map(|label| *label.rect())
    }

    fn label_for_id(doc: &Document, id: &str) -> Option<NodeId> {
        doc.elements().find(|&n| {
            doc.element(n)
                .map(|e| e.tag() == "label" && e.attr("for") == Some(id))
                .unwrap_or(false)
        })
    }

    /// Field nested directly inside a `<label>`
    pub fn wrapping_label(doc: &Document, field: NodeId) -> Option<NodeId> {
        let parent = doc.parent_element(field)?;
        (doc.element(parent)?.tag() == "label").then_some(parent)
    }

    /// Visible `label`, `span` or `div` right before the field
    pub fn preceding_sibling(doc: &Document, field: NodeId) -> Option<NodeId> {
        let previous = doc.previous_element_sibling(field)?;
        let data = doc.element(previous)?;
        (Self::is_label_like(data) && data.is_visible()).then_some(previous)
    }

    /// First visible `<label>` inside the nearest form group, fieldset or div
    pub fn group_label(doc: &Document, field: NodeId) -> Option<NodeId> {
        let group = doc.closest(field, |e| {
            e.has_class("form-group") || e.tag() == "fieldset" || e.tag() == "div"
        })?;
        let candidate = doc.find_descendant(group, |e| e.tag() == "label")?;
        doc.element(candidate)?.is_visible().then_some(candidate)
    }

    fn is_label_like(data: &ElementData) -> bool {
        matches!(data.tag(), "label" | "span" | "div")
    }
}
