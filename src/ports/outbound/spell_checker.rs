use crate::page_audit::domain::{TestResult, SPELLING_TEST};
use crate::shared::Result;
use async_trait::async_trait;

/// SpellChecker port for the external grammar/spelling service
///
/// The service is untrusted and best effort: any failure is turned into a
/// failing result for the one field being checked.
///
/// # Async Support
/// Requests are awaited one at a time by the audit session. No timeout is
/// imposed here; adapters may add one.
#[async_trait]
pub trait SpellChecker: Send + Sync {
    /// Submits `text` and returns the flagged excerpts
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    async fn flagged_excerpts(&self, text: &str, language: &str) -> Result<Vec<String>>;

    /// Checks `text` and converts the outcome into a spelling result
    async fn check_spelling(&self, text: &str, language: &str) -> TestResult {
        match self.flagged_excerpts(text, language).await {
            Ok(excerpts) => {
                let flagged: Vec<&str> = excerpts
                    .iter()
                    .map(String::as_str)
                    .filter(|e| !e.trim().is_empty())
                    .collect();
                if flagged.is_empty() {
                    TestResult::pass(SPELLING_TEST, "correct spelling")
                } else {
                    TestResult::fail(
                        SPELLING_TEST,
                        format!("misspellings: {}", flagged.join(", ")),
                    )
                }
            }
            Err(_) => TestResult::fail(SPELLING_TEST, "error querying API"),
        }
    }
}
