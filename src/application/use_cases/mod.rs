/// Use cases module containing application business logic orchestration
mod audit_session;
mod export_report;

pub use audit_session::{stored_report, AuditSession};
pub use export_report::{ExportOutcome, ExportReportUseCase};
