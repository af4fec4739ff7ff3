use crate::page_audit::domain::PageSnapshot;
use crate::shared::Result;

/// PageSource port for obtaining the page under test
///
/// Abstracts how the rendered page is captured (a snapshot file written by
/// the in-page collector, a fixture in tests, ...).
pub trait PageSource {
    /// Captures the currently active page
    ///
    /// # Errors
    /// Returns an error if the capture cannot be read or is malformed
    fn capture(&self) -> Result<PageSnapshot>;
}
