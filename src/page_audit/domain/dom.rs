use super::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rendered page as captured in the inspected page context.
///
/// The capture records, for every element, the values the browser computed
/// at capture time (style, layout box, offset parent), so every heuristic
/// can run without a layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub document: SnapshotElement,
}

/// A child node of an element: either raw text or a nested element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Text(String),
    Element(SnapshotElement),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub style: ComputedStyle,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default = "default_has_offset_parent")]
    pub has_offset_parent: bool,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
    /// Only present on `iframe`/`frame` elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameSnapshot>,
}

fn default_has_offset_parent() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
        }
    }
}

/// Content of a nested browsing context as seen from its parent document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "access", rename_all = "kebab-case")]
pub enum FrameSnapshot {
    SameOrigin { document: Box<SnapshotElement> },
    CrossOrigin { origin: String },
}

/// Handle of a node inside one [`Document`]. Only meaningful for the
/// document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: ComputedStyle,
    rect: Rect,
    has_offset_parent: bool,
}

/// A nested frame after the parent document tried to open it.
#[derive(Debug, Clone)]
pub enum FrameContent {
    Accessible(Box<Document>),
    Denied { origin: String },
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Clone, Copy)]
enum PendingNode<'a> {
    Element(&'a SnapshotElement),
    Text(&'a str),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed DOM of one document. Node ids are assigned in document
/// (pre-order) order, so sorting ids sorts by document position.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    frames: BTreeMap<NodeId, FrameContent>,
}

impl ElementData {
    fn from_snapshot(element: &SnapshotElement) -> Self {
        Self {
            tag: element.tag.to_ascii_lowercase(),
            attributes: element
                .attributes
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
                .collect(),
            style: element.style.clone(),
            rect: element.rect,
            has_offset_parent: element.has_offset_parent,
        }
    }

    /// Lowercased tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, treating an empty string as absent
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn id(&self) -> Option<&str> {
        self.non_empty_attr("id")
    }

    pub fn role(&self) -> Option<&str> {
        self.attr("role")
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn has_offset_parent(&self) -> bool {
        self.has_offset_parent
    }

    /// Rendered and laid out: not `display: none`, not `visibility: hidden`,
    /// and attached to an offset parent.
    pub fn is_visible(&self) -> bool {
        self.style.display != "none" && self.style.visibility != "hidden" && self.has_offset_parent
    }

    fn is_form_control(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "button" | "input" | "select" | "textarea" | "fieldset"
        )
    }

    fn is_focusable_by_default(&self) -> bool {
        match self.tag.as_str() {
            "a" | "area" => self.has_attr("href"),
            "button" | "input" | "select" | "textarea" | "iframe" => true,
            _ => false,
        }
    }

    /// Effective `tabIndex`: a parseable `tabindex` attribute wins, otherwise
    /// 0 for natively focusable elements and -1 for everything else.
    pub fn tab_index(&self) -> i32 {
        self.attr("tabindex")
            .and_then(|v| v.trim().parse::<i32>().ok())
            .unwrap_or(if self.is_focusable_by_default() { 0 } else { -1 })
    }

    /// Only form controls honour the `disabled` attribute.
    pub fn is_disabled(&self) -> bool {
        self.is_form_control() && self.has_attr("disabled")
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea") && self.has_attr("readonly")
    }
}

impl FrameContent {
    fn from_snapshot(frame: &FrameSnapshot) -> Self {
        match frame {
            FrameSnapshot::SameOrigin { document } => {
                FrameContent::Accessible(Box::new(Document::from_snapshot(document)))
            }
            FrameSnapshot::CrossOrigin { origin } => FrameContent::Denied {
                origin: origin.clone(),
            },
        }
    }
}

impl Document {
    pub fn from_snapshot(root: &SnapshotElement) -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            frames: BTreeMap::new(),
        };
        document.push_tree(root);
        document
    }

    /// Builds the arena with an explicit stack so that page depth is not
    /// bounded by the call stack. Ids come out in pre-order.
    fn push_tree(&mut self, root: &SnapshotElement) {
        let mut pending = vec![(PendingNode::Element(root), None)];

        while let Some((node, parent)) = pending.pop() {
            let id = NodeId(self.nodes.len());
            let kind = match node {
                PendingNode::Text(text) => NodeKind::Text(text.to_string()),
                PendingNode::Element(element) => {
                    if let Some(frame) = &element.frame {
                        self.frames.insert(id, FrameContent::from_snapshot(frame));
                    }
                    pending.extend(element.children.iter().rev().map(|child| {
                        let child = match child {
                            SnapshotNode::Element(child) => PendingNode::Element(child),
                            SnapshotNode::Text(text) => PendingNode::Text(text),
                        };
                        (child, Some(id))
                    }));
                    NodeKind::Element(ElementData::from_snapshot(element))
                }
            };

            self.nodes.push(NodeData {
                kind,
                parent,
                children: Vec::new(),
            });
            if let Some(parent) = parent {
                self.nodes[parent.0].children.push(id);
            }
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Element data for `id`, `None` for text nodes
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(id.0)?.parent?;
        self.element(parent).map(|_| parent)
    }

    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(id.0)?.parent?;
        let siblings = &self.nodes[parent.0].children;
        let position = siblings.iter().position(|&s| s == id)?;
        siblings[..position]
            .iter()
            .rev()
            .copied()
            .find(|&s| self.element(s).is_some())
    }

    /// Every element of the document in document order, root included
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.element(id).is_some())
    }

    /// Descendant elements of `scope` in document order, `scope` excluded
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.element(id).is_some() {
                found.push(id);
            }
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        found
    }

    /// First descendant of `scope` (document order) satisfying `predicate`
    pub fn find_descendant<F>(&self, scope: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.element(id).map(&predicate).unwrap_or(false))
    }

    /// Nearest inclusive ancestor of `id` satisfying `predicate`
    pub fn closest<F>(&self, id: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).map(&predicate).unwrap_or(false) {
                return Some(node);
            }
            current = self.parent_element(node);
        }
        None
    }

    /// Rendered text of `id`: text of the subtree with `display: none`
    /// branches skipped and whitespace runs collapsed to single spaces.
    pub fn inner_text(&self, id: NodeId) -> String {
        let mut raw = String::new();
        self.collect_text(id, &mut raw);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            match &self.nodes[node.0].kind {
                NodeKind::Text(text) => out.push_str(text),
                NodeKind::Element(data) if data.style.display == "none" => {}
                NodeKind::Element(_) => {
                    stack.extend(self.nodes[node.0].children.iter().rev().copied());
                }
            }
        }
    }

    /// Nested frame content attached to an `iframe` element, if captured
    pub fn frame(&self, id: NodeId) -> Option<&FrameContent> {
        self.frames.get(&id)
    }

    /// Document reached by following `path`, a chain of frame elements
    /// starting in this document; `None` if any step is not an accessible
    /// frame
    pub fn frame_document(&self, path: &[NodeId]) -> Option<&Document> {
        path.iter().try_fold(self, |doc, frame| match doc.frame(*frame)? {
            FrameContent::Accessible(inner) => Some(inner.as_ref()),
            FrameContent::Denied { .. } => None,
        })
    }

    /// All frame-bearing elements of this document in document order
    pub fn frames(&self) -> impl Iterator<Item = (NodeId, &FrameContent)> {
        self.frames.iter().map(|(id, content)| (*id, content))
    }
}
