use crate::shared::error::AuditError;

/// Export format enumeration
///
/// Json, Csv and Html produce a file; Pdf reuses the Html rendering and
/// hands it to the print dialog instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Html,
    Pdf,
}

impl ExportFormat {
    /// Parses a format name, reporting unknown names as
    /// [`AuditError::UnsupportedFormat`]
    pub fn parse_name(name: &str) -> Result<Self, AuditError> {
        name.parse().map_err(|_| AuditError::UnsupportedFormat {
            format: name.to_string(),
        })
    }

    /// Whether the format yields a file rather than a print job
    pub fn produces_file(&self) -> bool {
        !matches!(self, ExportFormat::Pdf)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "html" | "htm" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'csv', 'html' or 'pdf'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("Csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("htm").unwrap(), ExportFormat::Html);
        assert_eq!(ExportFormat::from_str("pdf").unwrap(), ExportFormat::Pdf);
    }

    #[test]
    fn test_from_str_invalid() {
        let error = ExportFormat::from_str("xlsx").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xlsx"));
    }

    #[test]
    fn test_parse_name_reports_unsupported_format() {
        let error = ExportFormat::parse_name("docx").unwrap_err();
        assert!(matches!(error, AuditError::UnsupportedFormat { ref format } if format == "docx"));
    }

    #[test]
    fn test_display_round_trips() {
        for format in [
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Html,
            ExportFormat::Pdf,
        ] {
            assert_eq!(ExportFormat::from_str(&format.to_string()).unwrap(), format);
        }
        assert!(!ExportFormat::Pdf.produces_file());
        assert!(ExportFormat::Csv.produces_file());
    }
}
