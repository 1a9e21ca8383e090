use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{QuickTranslateError, Result};
use crate::language::LanguagePair;
use super::Translator;

#[derive(Debug, Clone, Deserialize)]
pub struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    pub response_data: MyMemoryResponseData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyMemoryResponseData {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Translator backed by `GET <endpoint>?q=<text>&langpair=<source>|<target>`
pub struct MyMemoryTranslator {
    client: Client,
    config: TranslateConfig,
}

impl MyMemoryTranslator {
    pub fn new(config: TranslateConfig) -> Result<Self> {
        // No timeout: a request stays in flight until the endpoint answers
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the request URL with the text and language pair query-encoded
    pub fn request_url(&self, text: &str, pair: LanguagePair) -> Result<Url> {
        let langpair = pair.langpair();
        Url::parse_with_params(&self.config.endpoint, &[("q", text), ("langpair", langpair.as_str())])
            .map_err(|e| QuickTranslateError::Config(format!(
                "Invalid translation endpoint '{}': {}", self.config.endpoint, e
            )))
    }
}

/// Extract `responseData.translatedText` from a MyMemory response body
pub fn parse_response(body: &str) -> Result<String> {
    let response: MyMemoryResponse = serde_json::from_str(body)?;
    Ok(response.response_data.translated_text)
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, pair: LanguagePair) -> Result<String> {
        let url = self.request_url(text, pair)?;

        debug!("Sending translation request to: {}", url);

        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| QuickTranslateError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(QuickTranslateError::Translation(format!(
                "MyMemory API error {}: {}", status, error_text
            )));
        }

        let body = response.text().await
            .map_err(|e| QuickTranslateError::Translation(format!("Failed to read response: {}", e)))?;

        debug!("Raw MyMemory response: {}", body);

        parse_response(&body)
    }
}
