use crate::ports::outbound::PrintSpooler;
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const PRINT_ON_LOAD: &str = "<script>window.addEventListener('load', () => window.print());</script>\n";

/// BrowserPrintSpooler adapter: opens the document in the system viewer
///
/// The HTML is written to a persistent temporary file with a script that
/// opens the print dialog once loaded; the user picks "Save as PDF" there.
/// The file outlives the process because the viewer reads it after the
/// opener returns; it is only removed when the viewer could not be started.
pub struct BrowserPrintSpooler {
    program: String,
    args: Vec<String>,
    dir: Option<PathBuf>,
}

impl BrowserPrintSpooler {
    /// Spooler using the platform's default opener
    pub fn new() -> Self {
        let (program, args) = default_opener(std::env::consts::OS);
        Self::with_opener(program, args)
    }

    /// Spooler launching `program args... <file>`
    pub fn with_opener(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            dir: None,
        }
    }

    /// Writes printable documents into `dir` instead of the system temp dir
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Writes the printable document and returns its path
    pub fn prepare(&self, html: &str) -> Result<PathBuf> {
        let printable = match html.rfind("</body>") {
            Some(pos) => format!("{}{}{}", &html[..pos], PRINT_ON_LOAD, &html[pos..]),
            None => format!("{}{}", html, PRINT_ON_LOAD),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix("form-audit-print-").suffix(".html");
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        std::io::Write::write_all(&mut file, printable.as_bytes())?;
        let (_, path) = file.keep().map_err(|e| AuditError::PrintError {
            details: e.error.to_string(),
        })?;
        Ok(path)
    }

    fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| AuditError::PrintError {
                details: format!("{}: {}", self.program, e),
            })?;

        if !status.success() {
            return Err(AuditError::PrintError {
                details: format!("{} exited with {}", self.program, status),
            }
            .into());
        }
        Ok(())
    }
}

/// Opener command for an operating system name as in `std::env::consts::OS`
fn default_opener(os: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", Vec::new()),
        // `start` takes its first argument as the window title; an empty
        // argument reaches it as `""`
        "windows" => ("cmd", vec!["/C".into(), "start".into(), String::new()]),
        _ => ("xdg-open", Vec::new()),
    }
}

impl Default for BrowserPrintSpooler {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSpooler for BrowserPrintSpooler {
    fn print(&self, html: &str) -> Result<PathBuf> {
        let path = self.prepare(html)?;

        if let Err(e) = self.open(&path) {
            let _ = fs::remove_file(&path);
            return Err(e);
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_prepare_injects_print_script() {
        let temp_dir = TempDir::new().unwrap();
        let spooler = BrowserPrintSpooler::new().in_dir(temp_dir.path());
        let path = spooler
            .prepare("<html><body><h1>Relatório</h1></body></html>")
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("window.print()"));
        assert!(content.find("window.print()").unwrap() < content.find("</body>").unwrap());
        assert!(path.extension().map(|e| e == "html").unwrap_or(false));
        assert!(path.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_missing_opener_is_a_print_error() {
        let temp_dir = TempDir::new().unwrap();
        let spooler = BrowserPrintSpooler::with_opener("form-audit-no-such-opener", Vec::new())
            .in_dir(temp_dir.path());

        let err = spooler.print("<html><body></body></html>").unwrap_err();
        assert!(err.to_string().contains("Failed to open the print viewer"));
        // Nothing will ever view the document, so it is not left behind
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_opener_keeps_document() {
        let temp_dir = TempDir::new().unwrap();
        let spooler = BrowserPrintSpooler::with_opener("true", Vec::new()).in_dir(temp_dir.path());

        let path = spooler.print("<html><body></body></html>").unwrap();
        assert!(path.exists());
        assert_eq!(entries(temp_dir.path()), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_opener_removes_document() {
        let temp_dir = TempDir::new().unwrap();
        let spooler = BrowserPrintSpooler::with_opener("false", Vec::new()).in_dir(temp_dir.path());

        let err = spooler.print("<html><body></body></html>").unwrap_err();
        assert!(err.to_string().contains("exited with"));
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[test]
    fn test_default_openers() {
        assert_eq!(default_opener("linux"), ("xdg-open", Vec::new()));
        assert_eq!(default_opener("macos"), ("open", Vec::new()));

        let (program, args) = default_opener("windows");
        assert_eq!(program, "cmd");
        assert_eq!(args, vec!["/C", "start", ""]);
    }
}
