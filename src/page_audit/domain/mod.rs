/// Domain model for page audits
///
/// Pure types with no I/O: the captured page, the components and fields
/// extracted from it, check results and the report.
pub mod component;
pub mod dom;
pub mod geometry;
pub mod report;
pub mod test_result;

pub use component::{Component, ElementMeta, Field, FieldKind};
pub use dom::{
    ComputedStyle, Document, ElementData, FrameContent, FrameSnapshot, NodeId, PageSnapshot,
    SnapshotElement, SnapshotNode,
};
pub use geometry::Rect;
pub use report::{Report, Summary};
pub use test_result::{
    TestOutcome, TestResult, ACCESSIBILITY_TEST, ALIGNMENT_TEST, SPELLING_TEST, TAB_ORDER_TEST,
};
