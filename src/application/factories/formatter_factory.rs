use crate::adapters::outbound::formatters::{CsvFormatter, HtmlFormatter, JsonFormatter};
use crate::application::dto::ExportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified export format
    ///
    /// `Pdf` has no formatter of its own: it is the HTML rendering handed
    /// to the print dialog.
    ///
    /// # Examples
    /// ```
    /// use form_audit::application::dto::ExportFormat;
    /// use form_audit::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ExportFormat::Csv);
    /// ```
    pub fn create(format: ExportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ExportFormat::Json => Box::new(JsonFormatter::new()),
            ExportFormat::Csv => Box::new(CsvFormatter::new()),
            ExportFormat::Html | ExportFormat::Pdf => Box::new(HtmlFormatter::new()),
        }
    }

    /// Returns the progress message for the specified export format
    ///
    /// # Examples
    /// ```
    /// use form_audit::application::dto::ExportFormat;
    /// use form_audit::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ExportFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON export...");
    /// ```
    pub fn progress_message(format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Json => "📝 Generating JSON export...",
            ExportFormat::Csv => "📝 Generating CSV export...",
            ExportFormat::Html => "📝 Generating HTML report...",
            ExportFormat::Pdf => "🖨️  Preparing printable report...",
        }
    }
}
