//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, classify_failure};
use crate::extract::{Extraction, Extractor, GenerativeModel};
use crate::file::DocumentFile;
use crate::request::{GenerateContentRequest, GenerateContentResponse};

/// Gemini client. The API key travels as the `key` query parameter.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client, failing with [`ExtractError::Configuration`] when no
    /// API key is configured.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        let api_key = config.api_key()?.to_string();
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ExtractError> {
        let url = self.endpoint();

        info!(url = %url, model = %self.model, "calling generateContent");
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(ExtractError::transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = classify_failure(status.as_u16(), status.canonical_reason(), &body);
            warn!(status = status.as_u16(), error = %err, "generateContent failed");
            return Err(err);
        }

        let envelope: GenerateContentResponse =
            resp.json().await.map_err(ExtractError::transport)?;
        info!(candidates = envelope.candidates.len(), "generateContent returned");
        Ok(envelope)
    }
}

/// Extract one document with the configured Gemini model.
///
/// The credential is checked before the file is encoded or any request made.
pub async fn extract(
    config: &ExtractorConfig,
    file: &DocumentFile,
) -> Result<Extraction, ExtractError> {
    let client = GeminiClient::from_config(config)?;
    Extractor::new(client).extract(file).await
}
