//! Configuration file support for form-audit.
//!
//! Provides YAML-based configuration through `form-audit.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "form-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub language: Option<String>,
    pub spellcheck: Option<bool>,
    pub spellcheck_endpoint: Option<String>,
    pub spellcheck_timeout_secs: Option<u64>,
    pub alignment_tolerance: Option<f64>,
    pub store_path: Option<String>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref language) = config.language {
        if language.trim().is_empty() {
            bail!(
                "Invalid config: language must not be empty.\n\n\
                 💡 Hint: Use a language tag understood by the spelling service (e.g., \"pt-BR\")."
            );
        }
    }

    if let Some(tolerance) = config.alignment_tolerance {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            bail!(
                "Invalid config: alignment_tolerance must be a positive number, got {}.\n\n\
                 💡 Hint: The default tolerance is 15 (CSS pixels).",
                tolerance
            );
        }
    }

    if let Some(ref endpoint) = config.spellcheck_endpoint {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            bail!(
                "Invalid config: spellcheck_endpoint must be an http(s) URL, got '{}'.\n\n\
                 💡 Hint: The default endpoint is https://api.languagetool.org/v2/check",
                endpoint
            );
        }
    }

    if config.spellcheck_timeout_secs == Some(0) {
        bail!(
            "Invalid config: spellcheck_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the key to wait for the spelling service without a timeout."
        );
    }

    if let Some(ref format) = config.format {
        if format.parse::<crate::application::dto::ExportFormat>().is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use one of json, csv, html or pdf.",
                format
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write(
            &dir,
            r#"
language: en-US
spellcheck: false
spellcheck_endpoint: http://localhost:8081/v2/check
spellcheck_timeout_secs: 10
alignment_tolerance: 20.5
store_path: results/last.json
format: csv
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.language.as_deref(), Some("en-US"));
        assert_eq!(config.spellcheck, Some(false));
        assert_eq!(
            config.spellcheck_endpoint.as_deref(),
            Some("http://localhost:8081/v2/check")
        );
        assert_eq!(config.spellcheck_timeout_secs, Some(10));
        assert_eq!(config.alignment_tolerance, Some(20.5));
        assert_eq!(config.store_path.as_deref(), Some("results/last.json"));
        assert_eq!(config.format.as_deref(), Some("csv"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "language: es\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.language.as_deref(), Some("es"));
        assert!(config.spellcheck.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_language_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "language: \"  \"\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("language must not be empty"));
    }

    #[test]
    fn test_non_positive_tolerance_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "alignment_tolerance: 0\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("alignment_tolerance must be a positive number"));
    }

    #[test]
    fn test_endpoint_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "spellcheck_endpoint: ftp://example.com\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("must be an http(s) URL"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "spellcheck_timeout_secs: 0\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("spellcheck_timeout_secs"));
    }

    #[test]
    fn test_unsupported_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "format: xlsx\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("format 'xlsx' is not supported"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write(
            &dir,
            r#"
language: pt-BR
check_cve: true
theme: dark
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("theme"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.language.is_none());
        assert!(config.spellcheck.is_none());
        assert!(config.spellcheck_endpoint.is_none());
        assert!(config.spellcheck_timeout_secs.is_none());
        assert!(config.alignment_tolerance.is_none());
        assert!(config.store_path.is_none());
        assert!(config.format.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
