/// Console adapters: progress on stderr and the terminal report view
mod progress_reporter;
mod report_view;

pub use progress_reporter::StderrProgressReporter;
pub use report_view::ConsoleReportView;
