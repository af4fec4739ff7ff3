use crate::application::dto::ExportedFile;
use crate::page_audit::domain::Report;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const CSV_HEADER: &str = "Componente,Campo,Tipo,Teste,Resultado,Detalhes\n";

/// CsvFormatter adapter: one row per (component, field, test)
///
/// Every cell is wrapped in double quotes. Quotes inside values are NOT
/// escaped, so a label containing `"` yields a malformed row; consumers
/// that depend on the current output must be checked before changing it.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &Report) -> Result<ExportedFile> {
        let mut csv = String::from(CSV_HEADER);

        for component in &report.components {
            for field in &component.fields {
                for test in &field.tests {
                    csv.push_str(&format!(
                        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"\n",
                        component.title, field.label, field.kind, test.test, test.result, test.details
                    ));
                }
            }
        }

        Ok(ExportedFile::new(
            csv,
            format!("testes-unitarios-{}.csv", report.run_date()),
            "text/csv",
        ))
    }
}
