use crate::page_audit::domain::{Report, TestOutcome};
use owo_colors::OwoColorize;

/// Renders a report for the terminal: a summary block followed by one
/// table per component.
pub struct ConsoleReportView {
    colored: bool,
}

impl ConsoleReportView {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        let summary = &report.summary;

        out.push_str(&format!("{}\n", self.heading("Summary")));
        out.push_str(&format!("  URL:          {}\n", report.url));
        out.push_str(&format!("  Total tests:  {}\n", summary.total_tests));
        out.push_str(&format!("  Passed:       {}\n", summary.passed_tests));
        out.push_str(&format!("  Failed:       {}\n", summary.failed_tests));
        out.push_str(&format!("  Success rate: {}%\n", summary.success_rate));
        out.push_str(&format!(
            "  Tab order:    {}\n",
            if report.tabulation_correct {
                self.outcome(TestOutcome::Pass)
            } else {
                self.outcome(TestOutcome::Fail)
            }
        ));

        for component in &report.components {
            out.push('\n');
            out.push_str(&format!("{}\n", self.heading(&component.title)));

            let rows: Vec<[String; 4]> = component
                .fields
                .iter()
                .flat_map(|field| {
                    field.tests.iter().map(move |test| {
                        [
                            field.label.clone(),
                            field.kind.to_string(),
                            test.test.clone(),
                            test.details.clone(),
                        ]
                    })
                })
                .collect();
            let outcomes: Vec<TestOutcome> = component
                .fields
                .iter()
                .flat_map(|field| field.tests.iter().map(|test| test.result))
                .collect();

            let headers = ["Campo", "Tipo", "Teste", "Detalhes"];
            let widths: Vec<usize> = (0..4)
                .map(|i| {
                    rows.iter()
                        .map(|row| row[i].chars().count())
                        .chain(std::iter::once(headers[i].chars().count()))
                        .max()
                        .unwrap_or(0)
                })
                .collect();

            out.push_str("  ");
            for (i, header) in headers.iter().enumerate() {
                out.push_str(&pad(header, widths[i]));
                out.push_str("  ");
            }
            out.push_str("Resultado\n");

            for (row, outcome) in rows.iter().zip(outcomes) {
                out.push_str("  ");
                for (i, cell) in row.iter().enumerate() {
                    out.push_str(&pad(cell, widths[i]));
                    out.push_str("  ");
                }
                out.push_str(&self.outcome(outcome));
                out.push('\n');
            }
        }

        out
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn outcome(&self, outcome: TestOutcome) -> String {
        match (self.colored, outcome) {
            (false, _) => outcome.to_string(),
            (true, TestOutcome::Pass) => outcome.as_str().green().bold().to_string(),
            (true, TestOutcome::Fail) => outcome.as_str().red().bold().to_string(),
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
