use crate::ports::outbound::ResultStore;
use crate::shared::error::AuditError;
use crate::shared::security::{read_regular_file, validate_not_symlink, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// On-disk layout of the single result slot
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSlot {
    last_test_results: Value,
    last_export: String,
}

/// FileSystemResultStore adapter: single-slot JSON file
///
/// Each save rewrites the whole file (written to a sibling temp file and
/// renamed into place), so readers see either the old or the new run.
pub struct FileSystemResultStore {
    path: PathBuf,
}

impl FileSystemResultStore {
    pub const DEFAULT_PATH: &'static str = ".form-audit/last-results.json";

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, details: impl ToString) -> anyhow::Error {
        AuditError::StoreError {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

impl ResultStore for FileSystemResultStore {
    fn save(&self, data: Value) -> Result<()> {
        let slot = StoredSlot {
            last_test_results: data,
            last_export: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let content = serde_json::to_string(&slot)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.store_error(e))?;

        if self.path.exists() {
            validate_not_symlink(&self.path, "write").map_err(|e| self.store_error(e))?;
        }

        let mut staged = tempfile::NamedTempFile::new_in(&parent).map_err(|e| self.store_error(e))?;
        std::io::Write::write_all(&mut staged, content.as_bytes())
            .map_err(|e| self.store_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.store_error(e.error))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = read_regular_file(&self.path, "stored results", MAX_INPUT_FILE_SIZE)
            .map_err(|e| self.store_error(e))?;
        let slot: StoredSlot = serde_json::from_str(&content).map_err(|e| self.store_error(e))?;
        Ok(Some(slot.last_test_results))
    }
}

/// InMemoryResultStore adapter: process-local slot, used when no durable
/// store is wanted and in tests
#[derive(Default)]
pub struct InMemoryResultStore {
    slot: Mutex<Option<Value>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(&self, data: Value) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("result slot lock poisoned"))?;
        *slot = Some(data);
        Ok(())
    }

    fn load(&self) -> Result<Option<Value>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("result slot lock poisoned"))?;
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{BridgeRequest, BridgeStatus};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_get_on_empty_store_returns_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSystemResultStore::new(temp_dir.path().join("results.json"));

        let response = store.handle(BridgeRequest::GetResults).unwrap();
        assert_eq!(response.status, BridgeStatus::Ok);
        assert_eq!(response.data, Some(json!([])));
    }

    #[test]
    fn test_save_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/results.json");
        let store = FileSystemResultStore::new(path.clone());

        let response = store
            .handle(BridgeRequest::SaveResults {
                data: json!({"components": [], "url": "https://a"}),
            })
            .unwrap();
        assert_eq!(response.status, BridgeStatus::Ok);
        assert!(response.data.is_none());

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["lastTestResults"]["url"], "https://a");
        assert!(on_disk["lastExport"].as_str().unwrap().ends_with('Z'));

        let response = store.handle(BridgeRequest::GetResults).unwrap();
        assert_eq!(response.data.unwrap()["url"], "https://a");
    }

    #[test]
    fn test_last_write_wins() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSystemResultStore::new(temp_dir.path().join("results.json"));

        store.save(json!({"run": 1})).unwrap();
        store.save(json!({"run": 2})).unwrap();
        assert_eq!(store.load().unwrap(), Some(json!({"run": 2})));
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.json");
        fs::write(&path, "not json").unwrap();

        let err = FileSystemResultStore::new(path).load().unwrap_err();
        assert!(err.to_string().contains("Result store error"));
    }

    #[test]
    fn test_export_data_is_passed_through() {
        let store = InMemoryResultStore::new();
        let response = store
            .handle(BridgeRequest::ExportData {
                data: json!({"format": "csv"}),
            })
            .unwrap();
        assert_eq!(response.status, BridgeStatus::ExportHandled);
        assert_eq!(response.data, Some(json!({"format": "csv"})));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryResultStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(json!([1])).unwrap();
        assert_eq!(store.load().unwrap(), Some(json!([1])));
    }
}
