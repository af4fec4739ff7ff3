mod cli;

use cli::{Args, Command, ExportArgs, RunArgs, StoreArgs};
use form_audit::adapters::outbound::console::{ConsoleReportView, StderrProgressReporter};
use form_audit::adapters::outbound::filesystem::{
    FileSystemResultStore, FileSystemSnapshotReader,
};
use form_audit::adapters::outbound::network::LanguageToolClient;
use form_audit::adapters::outbound::print::BrowserPrintSpooler;
use form_audit::application::dto::{AuditOptions, ExportFormat};
use form_audit::application::factories::{PresenterFactory, PresenterType};
use form_audit::application::use_cases::{
    stored_report, AuditSession, ExportOutcome, ExportReportUseCase,
};
use form_audit::config::{discover_config, load_config_from_path, ConfigFile};
use form_audit::page_audit::domain::Report;
use form_audit::page_audit::services::AlignmentChecker;
use form_audit::ports::outbound::OutputPresenter;
use form_audit::shared::error::ExitCode;
use form_audit::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Run(run_args) => run_audit(run_args).await,
        Command::Show(store_args) => show_stored(store_args),
        Command::Export(export_args) => export_stored(export_args),
    }
}

async fn run_audit(args: RunArgs) -> Result<ExitCode> {
    let config = load_config(&args.store)?;
    let options = resolve_options(&args, &config);

    // Create adapters (Dependency Injection)
    let page_source = FileSystemSnapshotReader::new(args.snapshot.clone());
    let endpoint = config
        .spellcheck_endpoint
        .clone()
        .unwrap_or_else(|| LanguageToolClient::DEFAULT_ENDPOINT.to_string());
    let timeout = config.spellcheck_timeout_secs.map(Duration::from_secs);
    let spell_checker = LanguageToolClient::new(endpoint, timeout)?;
    let store = FileSystemResultStore::new(resolve_store_path(&args.store, &config));

    let mut session = AuditSession::new(
        page_source,
        spell_checker,
        store,
        StderrProgressReporter::new(),
        options,
    );

    let report = session.run().await?;
    print_report(report);

    let format = match resolve_format(args.format, &config)? {
        Some(format) => Some(format),
        None if args.output.is_some() => Some(ExportFormat::Json),
        None => None,
    };
    if let Some(format) = format {
        export(Some(report), format, args.output.as_deref())?;
    }

    if args.fail_on_failures && report.has_failures() {
        return Ok(ExitCode::FailuresDetected);
    }
    Ok(ExitCode::Success)
}

fn show_stored(args: StoreArgs) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let store = FileSystemResultStore::new(resolve_store_path(&args, &config));

    match stored_report(&store)? {
        Some(report) => print_report(&report),
        None => eprintln!("ℹ️  No stored results. Run the tests first (form-audit run <SNAPSHOT>)."),
    }
    Ok(ExitCode::Success)
}

fn export_stored(args: ExportArgs) -> Result<ExitCode> {
    let config = load_config(&args.store)?;
    let store = FileSystemResultStore::new(resolve_store_path(&args.store, &config));

    let report = stored_report(&store)?;
    export(report.as_ref(), args.format, args.output.as_deref())?;
    Ok(ExitCode::Success)
}

fn export(report: Option<&Report>, format: ExportFormat, output: Option<&str>) -> Result<()> {
    let use_case = ExportReportUseCase::new(BrowserPrintSpooler::new(), StderrProgressReporter::new());

    if let ExportOutcome::File(file) = use_case.execute(report, format)? {
        let presenter_type = match output {
            Some("-") => PresenterType::Stdout,
            Some(path) => PresenterType::File(PathBuf::from(path)),
            None => PresenterType::File(PathBuf::from(&file.filename)),
        };
        PresenterFactory::create(presenter_type).present(&file.content)?;
    }
    Ok(())
}

fn print_report(report: &Report) {
    let view = ConsoleReportView::new(std::io::stderr().is_terminal());
    eprintln!();
    eprint!("{}", view.render(report));
}

/// Explicit `--config` wins over auto-discovery in the current directory.
fn load_config(args: &StoreArgs) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// CLI flags override config values, which override the defaults.
fn resolve_options(args: &RunArgs, config: &ConfigFile) -> AuditOptions {
    AuditOptions::new(
        args.language
            .clone()
            .or_else(|| config.language.clone())
            .unwrap_or_else(|| AuditOptions::DEFAULT_LANGUAGE.to_string()),
        !args.no_spellcheck && config.spellcheck.unwrap_or(true),
        config
            .alignment_tolerance
            .unwrap_or(AlignmentChecker::DEFAULT_TOLERANCE),
    )
}

fn resolve_store_path(args: &StoreArgs, config: &ConfigFile) -> PathBuf {
    args.store
        .clone()
        .or_else(|| config.store_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(FileSystemResultStore::DEFAULT_PATH))
}

fn resolve_format(cli: Option<ExportFormat>, config: &ConfigFile) -> Result<Option<ExportFormat>> {
    match (cli, &config.format) {
        (Some(format), _) => Ok(Some(format)),
        (None, Some(name)) => Ok(Some(ExportFormat::parse_name(name)?)),
        (None, None) => Ok(None),
    }
}
