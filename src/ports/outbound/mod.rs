/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (page capture, spelling service,
/// result store, file system, console, print viewer).
pub mod formatter;
pub mod output_presenter;
pub mod page_source;
pub mod print_spooler;
pub mod progress_reporter;
pub mod result_store;
pub mod spell_checker;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use page_source::PageSource;
pub use print_spooler::PrintSpooler;
pub use progress_reporter::ProgressReporter;
pub use result_store::{BridgeRequest, BridgeResponse, BridgeStatus, ResultStore};
pub use spell_checker::SpellChecker;
