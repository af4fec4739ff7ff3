use async_trait::async_trait;
use form_audit::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SpellChecker with canned answers per text
///
/// Texts without a canned answer are considered correctly spelled.
#[derive(Default, Clone)]
pub struct MockSpellChecker {
    pub flagged: HashMap<String, Vec<String>>,
    pub failing: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSpellChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_misspelling(mut self, text: &str, excerpt: &str) -> Self {
        self.flagged
            .entry(text.to_string())
            .or_default()
            .push(excerpt.to_string());
        self
    }

    pub fn with_failure(mut self, text: &str) -> Self {
        self.failing.push(text.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpellChecker for MockSpellChecker {
    async fn flagged_excerpts(&self, text: &str, _language: &str) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.failing.iter().any(|t| t == text) {
            anyhow::bail!("Mock spelling service failure");
        }
        Ok(self.flagged.get(text).cloned().unwrap_or_default())
    }
}
