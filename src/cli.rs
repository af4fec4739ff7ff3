use clap::{Args as ClapArgs, Parser, Subcommand};
use form_audit::application::dto::ExportFormat;
use std::path::PathBuf;

/// Audit the forms of a captured web page for label, tab-order and spelling problems
#[derive(Parser, Debug)]
#[command(name = "form-audit")]
#[command(version)]
#[command(about = "Audit the forms of a captured web page for accessibility problems", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every check over a page snapshot and store the results
    Run(RunArgs),
    /// Print the stored results of the last run
    Show(StoreArgs),
    /// Export the stored results of the last run
    Export(ExportArgs),
}

/// Options shared by every subcommand
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Path to the result store (defaults to .form-audit/last-results.json)
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Path to a config file (defaults to ./form-audit.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct RunArgs {
    /// Page snapshot captured from the inspected page (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Also export the results: json, csv, html or pdf
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Export destination (`-` for stdout; defaults to the generated filename)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Skip the spelling service (generic labels are still flagged)
    #[arg(long)]
    pub no_spellcheck: bool,

    /// Language tag sent to the spelling service (default: pt-BR)
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// Exit with code 1 when any check fails
    #[arg(long)]
    pub fail_on_failures: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ExportArgs {
    /// Export format: json, csv, html or pdf
    #[arg(short, long)]
    pub format: ExportFormat,

    /// Export destination (`-` for stdout; defaults to the generated filename)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
