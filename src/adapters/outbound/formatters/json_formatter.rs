use crate::application::dto::ExportedFile;
use crate::page_audit::domain::report::iso_millis;
use crate::page_audit::domain::{FieldKind, Report, Summary, TestResult};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name recorded in the export metadata
pub const TOOL_NAME: &str = "form-audit";

/// Exported JSON document: metadata, summary and trimmed components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonExport {
    pub metadata: ExportMetadata,
    pub summary: Summary,
    pub components: Vec<ExportedComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    #[serde(with = "iso_millis")]
    pub generated_at: DateTime<Utc>,
    pub url: String,
    pub tool: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedComponent {
    pub title: String,
    pub fields: Vec<ExportedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedField {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub tests: Vec<TestResult>,
}

impl From<&Report> for JsonExport {
    fn from(report: &Report) -> Self {
        Self {
            metadata: ExportMetadata {
                generated_at: report.timestamp,
                url: report.url.clone(),
                tool: TOOL_NAME.to_string(),
            },
            summary: report.summary.clone(),
            components: report
                .components
                .iter()
                .map(|component| ExportedComponent {
                    title: component.title.clone(),
                    fields: component
                        .fields
                        .iter()
                        .map(|field| ExportedField {
                            label: field.label.clone(),
                            kind: field.kind,
                            tests: field.tests.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// JsonFormatter adapter: pretty-printed JSON with two-space indentation
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<ExportedFile> {
        let content = serde_json::to_string_pretty(&JsonExport::from(report))?;
        Ok(ExportedFile::new(
            content,
            format!("testes-unitarios-{}.json", report.run_date()),
            "application/json",
        ))
    }
}
