/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_options;
mod export_format;
mod exported_file;

pub use audit_options::AuditOptions;
pub use export_format::ExportFormat;
pub use exported_file::ExportedFile;
