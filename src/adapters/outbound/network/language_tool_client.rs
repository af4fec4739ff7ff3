use crate::ports::outbound::SpellChecker;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<RuleMatch>,
}

#[derive(Debug, Deserialize)]
struct RuleMatch {
    context: MatchContext,
}

#[derive(Debug, Deserialize)]
struct MatchContext {
    #[serde(default)]
    text: String,
}

/// LanguageToolClient adapter for the LanguageTool `/v2/check` API
///
/// Implements the SpellChecker port. Each call posts one form-encoded
/// `text`/`language` pair and returns the context excerpt of every match.
pub struct LanguageToolClient {
    client: reqwest::Client,
    endpoint: String,
}

impl LanguageToolClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.languagetool.org/v2/check";

    /// Creates a client for `endpoint`.
    ///
    /// Without a `timeout` a hung request stalls the run; pass one to bound it.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("form-audit/{}", version);
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `application/x-www-form-urlencoded` body for one check
    fn form_body(text: &str, language: &str) -> String {
        format!(
            "text={}&language={}",
            urlencoding::encode(text),
            urlencoding::encode(language)
        )
    }
}

#[async_trait]
impl SpellChecker for LanguageToolClient {
    async fn flagged_excerpts(&self, text: &str, language: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Self::form_body(text, language))
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("LanguageTool API returned status code {}", response.status());
        }

        let body: CheckResponse = response.json().await?;
        Ok(body.matches.into_iter().map(|m| m.context.text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LanguageToolClient::new(LanguageToolClient::DEFAULT_ENDPOINT, None);
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().endpoint(),
            "https://api.languagetool.org/v2/check"
        );
    }

    #[test]
    fn test_client_creation_with_timeout() {
        let client =
            LanguageToolClient::new("http://localhost:8081/v2/check", Some(Duration::from_secs(5)));
        assert!(client.is_ok());
    }

    #[test]
    fn test_form_body_is_url_encoded() {
        assert_eq!(
            LanguageToolClient::form_body("Endereço & nº", "pt-BR"),
            "text=Endere%C3%A7o%20%26%20n%C2%BA&language=pt-BR"
        );
    }

    #[test]
    fn test_response_parsing() {
        let body: CheckResponse = serde_json::from_str(
            r#"{"software": {"name": "LanguageTool"},
                "matches": [
                    {"message": "Possível erro", "context": {"text": "Endereso", "offset": 0, "length": 8}},
                    {"message": "Espaço", "context": {"text": ""}}
                ]}"#,
        )
        .unwrap();
        let excerpts: Vec<String> = body.matches.into_iter().map(|m| m.context.text).collect();
        assert_eq!(excerpts, vec!["Endereso".to_string(), String::new()]);
    }

    #[tokio::test]
    async fn test_unreachable_service_becomes_failed_result() {
        let client = LanguageToolClient::new(
            "http://127.0.0.1:9/v2/check",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let result = client.check_spelling("Nome", "pt-BR").await;
        assert!(!result.is_pass());
        assert_eq!(result.details, "error querying API");
    }
}
