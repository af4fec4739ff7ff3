use form_audit::prelude::*;

/// Mock PageSource serving an in-memory snapshot
pub struct MockPageSource {
    pub snapshot: serde_json::Value,
}

impl MockPageSource {
    pub fn new(snapshot: serde_json::Value) -> Self {
        Self { snapshot }
    }

    /// Loads a snapshot from `tests/fixtures`
    pub fn fixture(name: &str) -> Self {
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        let content = std::fs::read_to_string(path).unwrap();
        Self::new(serde_json::from_str(&content).unwrap())
    }
}

impl PageSource for MockPageSource {
    fn capture(&self) -> Result<PageSnapshot> {
        Ok(serde_json::from_value(self.snapshot.clone())?)
    }
}
