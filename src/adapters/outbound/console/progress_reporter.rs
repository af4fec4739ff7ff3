use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so exports sent to stdout stay clean. The spelling
/// stage is shown as an indicatif bar; everything else is a plain line.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn bar_for(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        match slot.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) => pb.clone(),
            _ => {
                let pb = ProgressBar::new(total as u64);
                if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                *slot = Some(pb.clone());
                pb
            }
        }
    }

    fn clear_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.bar_for(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.clear_bar();
        }
    }

    fn report_error(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.suspend(|| eprintln!("{}", message));
            return;
        }
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_does_not_panic() {
        let reporter = StderrProgressReporter::new();
        reporter.report("🔍 Extracting components...");
        reporter.report_progress(1, 3, Some("Nome"));
        reporter.report_error("⚠️  Warning: skipped frame");
        reporter.report_progress(3, 3, None);
        reporter.report_completion("✅ Done");
    }

    #[test]
    fn test_bar_is_cleared_when_stage_completes() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(2, 2, None);
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
