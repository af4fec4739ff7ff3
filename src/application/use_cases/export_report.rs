use crate::application::dto::{ExportFormat, ExportedFile};
use crate::application::factories::FormatterFactory;
use crate::page_audit::domain::Report;
use crate::ports::outbound::{PrintSpooler, ProgressReporter, ReportFormatter};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::path::PathBuf;

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A file ready to be written where the user chooses
    File(ExportedFile),
    /// The HTML report was handed to the print dialog from this file
    Printed(PathBuf),
}

/// ExportReportUseCase - renders the current report in a chosen format
///
/// Exports are only possible once a report is current; asking for one
/// before that is reported as [`AuditError::NoCurrentReport`].
pub struct ExportReportUseCase<P, PR> {
    print_spooler: P,
    progress_reporter: PR,
}

impl<P: PrintSpooler, PR: ProgressReporter> ExportReportUseCase<P, PR> {
    pub fn new(print_spooler: P, progress_reporter: PR) -> Self {
        Self {
            print_spooler,
            progress_reporter,
        }
    }

    pub fn execute(&self, report: Option<&Report>, format: ExportFormat) -> Result<ExportOutcome> {
        let report = report.ok_or(AuditError::NoCurrentReport)?;

        self.progress_reporter
            .report(FormatterFactory::progress_message(format));
        let file = FormatterFactory::create(format).format(report)?;

        if format.produces_file() {
            return Ok(ExportOutcome::File(file));
        }

        let path = self.print_spooler.print(&file.content)?;
        self.progress_reporter
            .report_completion(&format!("🖨️  Print view opened: {}", path.display()));
        Ok(ExportOutcome::Printed(path))
    }
}
