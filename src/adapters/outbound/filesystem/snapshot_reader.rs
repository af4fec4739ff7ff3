use crate::page_audit::domain::PageSnapshot;
use crate::ports::outbound::PageSource;
use crate::shared::error::AuditError;
use crate::shared::security::{read_regular_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// FileSystemSnapshotReader adapter: reads a captured page from disk
///
/// Implements the PageSource port for snapshot files produced by the
/// in-page collector.
pub struct FileSystemSnapshotReader {
    path: PathBuf,
}

impl FileSystemSnapshotReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PageSource for FileSystemSnapshotReader {
    fn capture(&self) -> Result<PageSnapshot> {
        if !self.path.exists() {
            return Err(AuditError::SnapshotNotFound {
                path: self.path.clone(),
                suggestion: "Capture the active page with the in-page collector and pass the saved JSON file".to_string(),
            }
            .into());
        }

        let content = read_regular_file(&self.path, "page snapshot", MAX_INPUT_FILE_SIZE)
            .map_err(|e| AuditError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        parse_snapshot(&content).map_err(|e| {
            AuditError::SnapshotParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Every element nests two JSON levels deep (object plus `children`), so
/// serde_json's default recursion limit would reject ordinary deep pages.
/// The limit is lifted and the stack grows on demand instead.
fn parse_snapshot(content: &str) -> serde_json::Result<PageSnapshot> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let snapshot = PageSnapshot::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(snapshot)
}
