use crate::application::dto::ExportedFile;
use crate::page_audit::domain::{Component, Report};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        .header { background: #f5f5f5; padding: 20px; border-radius: 5px; margin-bottom: 20px; }
        .summary { background: #e8f4fd; padding: 15px; border-radius: 5px; margin-bottom: 20px; }
        .component { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }
        table { width: 100%; border-collapse: collapse; margin-top: 10px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .pass { color: green; font-weight: bold; }
        .fail { color: red; font-weight: bold; }
"#;

/// HtmlFormatter adapter: standalone styled report document
///
/// Also the source of the PDF export, which prints this document.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for HTML element content and attribute values
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Renders the full document
    pub fn render(&self, report: &Report) -> String {
        let mut html = String::new();
        self.render_head(&mut html);
        html.push_str("<body>\n");
        self.render_header(&mut html, report);
        self.render_summary(&mut html, report);
        for component in &report.components {
            self.render_component(&mut html, component);
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_head(&self, html: &mut String) {
        html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Relatório de Testes Unitários</title>\n");
        html.push_str("    <style>\n");
        html.push_str(STYLE);
        html.push_str("    </style>\n</head>\n");
    }

    fn render_header(&self, html: &mut String, report: &Report) {
        html.push_str("    <div class=\"header\">\n");
        html.push_str("        <h1>Relatório de Testes Unitários</h1>\n");
        html.push_str(&format!(
            "        <p><strong>Data de geração:</strong> {}</p>\n",
            report.timestamp.format("%d/%m/%Y, %H:%M:%S UTC")
        ));
        html.push_str(&format!(
            "        <p><strong>URL:</strong> {}</p>\n",
            Self::escape(&report.url)
        ));
        html.push_str("    </div>\n");
    }

    fn render_summary(&self, html: &mut String, report: &Report) {
        let summary = &report.summary;
        let rows = [
            ("Total de Testes", summary.total_tests.to_string()),
            ("Testes Aprovados", summary.passed_tests.to_string()),
            ("Testes Reprovados", summary.failed_tests.to_string()),
            ("Taxa de Sucesso", format!("{}%", summary.success_rate)),
            ("Componentes Analisados", summary.total_components.to_string()),
            ("Campos Validados", summary.total_fields.to_string()),
        ];

        html.push_str("    <div class=\"summary\">\n");
        html.push_str("        <h2>Resumo Executivo</h2>\n");
        for (name, value) in rows {
            html.push_str(&format!(
                "        <p><strong>{}:</strong> {}</p>\n",
                name,
                Self::escape(&value)
            ));
        }
        html.push_str("    </div>\n");
    }

    fn render_component(&self, html: &mut String, component: &Component) {
        html.push_str("    <div class=\"component\">\n");
        html.push_str(&format!("        <h3>{}</h3>\n", Self::escape(&component.title)));
        html.push_str("        <table>\n            <thead>\n                <tr>\n");
        for heading in ["Campo", "Tipo", "Teste", "Detalhes", "Resultado"] {
            html.push_str(&format!("                    <th>{}</th>\n", heading));
        }
        html.push_str("                </tr>\n            </thead>\n            <tbody>\n");

        for field in &component.fields {
            for test in &field.tests {
                html.push_str("                <tr>\n");
                html.push_str(&format!(
                    "                    <td>{}</td>\n",
                    Self::escape(&field.label)
                ));
                html.push_str(&format!("                    <td>{}</td>\n", field.kind));
                html.push_str(&format!(
                    "                    <td>{}</td>\n",
                    Self::escape(&test.test)
                ));
                html.push_str(&format!(
                    "                    <td>{}</td>\n",
                    Self::escape(&test.details)
                ));
                html.push_str(&format!(
                    "                    <td class=\"{}\">{}</td>\n",
                    test.result.as_str().to_lowercase(),
                    test.result
                ));
                html.push_str("                </tr>\n");
            }
        }

        html.push_str("            </tbody>\n        </table>\n    </div>\n");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report) -> Result<ExportedFile> {
        Ok(ExportedFile::new(
            self.render(report),
            format!("relatorio-testes-{}.html", report.run_date()),
            "text/html",
        ))
    }
}
