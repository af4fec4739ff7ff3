use crate::page_audit::services::AlignmentChecker;

/// AuditOptions - settings for one audit session
#[derive(Debug, Clone, PartialEq)]
pub struct AuditOptions {
    /// Language tag sent to the spelling service
    pub language: String,
    /// When false, the spelling stage is skipped (generic labels are still flagged)
    pub spellcheck: bool,
    /// Maximum centroid distance accepted by the alignment check
    pub alignment_tolerance: f64,
}

impl AuditOptions {
    pub const DEFAULT_LANGUAGE: &'static str = "pt-BR";

    pub fn new(language: String, spellcheck: bool, alignment_tolerance: f64) -> Self {
        Self {
            language,
            spellcheck,
            alignment_tolerance,
        }
    }
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LANGUAGE.to_string(),
            true,
            AlignmentChecker::DEFAULT_TOLERANCE,
        )
    }
}
