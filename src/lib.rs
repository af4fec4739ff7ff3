//! form-audit - accessibility audit of web page forms
//!
//! This library checks the forms of a captured web page: whether every
//! field has a label placed next to it, whether labels are real text
//! rather than placeholders, whether the keyboard tab order is consistent
//! and whether label texts are spelled correctly. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`page_audit`): Page model, checks and report
//! - **Application Layer** (`application`): Audit session, export use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use form_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn audit() -> Result<()> {
//! // Create adapters
//! let page_source = FileSystemSnapshotReader::new(PathBuf::from("page.json"));
//! let spell_checker = LanguageToolClient::new(LanguageToolClient::DEFAULT_ENDPOINT, None)?;
//! let store = InMemoryResultStore::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create the session and run every check
//! let mut session = AuditSession::new(
//!     page_source,
//!     spell_checker,
//!     store,
//!     progress_reporter,
//!     AuditOptions::default(),
//! );
//! let report = session.run().await?;
//!
//! // Format output
//! let file = JsonFormatter::new().format(report)?;
//! println!("{}", file.content);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod page_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleReportView, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemResultStore, FileSystemSnapshotReader, FileSystemWriter, InMemoryResultStore,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, HtmlFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::LanguageToolClient;
    pub use crate::adapters::outbound::print::BrowserPrintSpooler;
    pub use crate::application::dto::{AuditOptions, ExportFormat, ExportedFile};
    pub use crate::application::use_cases::{
        stored_report, AuditSession, ExportOutcome, ExportReportUseCase,
    };
    pub use crate::page_audit::domain::{
        Component, Document, ElementMeta, Field, FieldKind, PageSnapshot, Rect, Report, Summary,
        TestOutcome, TestResult, ACCESSIBILITY_TEST, ALIGNMENT_TEST, SPELLING_TEST,
        TAB_ORDER_TEST,
    };
    pub use crate::page_audit::policies::GenericLabelPolicy;
    pub use crate::page_audit::services::{AlignmentChecker, ComponentExtractor, TabOrderChecker};
    pub use crate::ports::outbound::{
        BridgeRequest, BridgeResponse, BridgeStatus, OutputPresenter, PageSource, PrintSpooler,
        ProgressReporter, ReportFormatter, ResultStore, SpellChecker,
    };
    pub use crate::shared::Result;
}
