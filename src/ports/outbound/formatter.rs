use crate::application::dto::ExportedFile;
use crate::page_audit::domain::Report;
use crate::shared::Result;

/// ReportFormatter port for rendering a report as a downloadable file
///
/// Implementations are pure: same report in, same file out.
pub trait ReportFormatter {
    /// Renders `report` into its content, filename and media type
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &Report) -> Result<ExportedFile>;
}
