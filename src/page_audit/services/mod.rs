/// Domain services: the stateless checks run over a captured page
mod alignment_checker;
mod component_extractor;
mod label_resolver;
mod tab_order_checker;

pub use alignment_checker::AlignmentChecker;
pub use component_extractor::{ComponentExtractor, ExtractionOutcome, InputLocation};
pub use label_resolver::{LabelResolver, LabelStrategy, ResolvedLabel};
pub use tab_order_checker::TabOrderChecker;
