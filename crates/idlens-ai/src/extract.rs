//! Extraction orchestration: document → model → canonical record.

use async_trait::async_trait;
use idlens_core::{CanonicalDocument, normalize};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::file::DocumentFile;
use crate::parse::{UnparsedResponse, parse_model_text};
use crate::request::{GenerateContentRequest, GenerateContentResponse};

/// A generative model able to answer a `generateContent` request.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ExtractError>;
}

/// Outcome of one extraction.
///
/// `unparsed` is set when the model answered with text that held no JSON
/// object; `document` is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    #[serde(flatten)]
    pub document: CanonicalDocument,
    #[serde(flatten)]
    pub unparsed: Option<UnparsedResponse>,
}

impl Extraction {
    /// Parse and normalise a model answer. Never fails.
    pub fn from_model_text(text: &str) -> Self {
        match parse_model_text(text) {
            Ok(raw) => Self {
                document: normalize(Some(&raw)),
                unparsed: None,
            },
            Err(e) => {
                warn!(error = %e, chars = text.len(), "model answer is not JSON, keeping raw text");
                Self {
                    document: normalize(None),
                    unparsed: Some(UnparsedResponse::new(text)),
                }
            }
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.unparsed.is_none()
    }
}

/// Runs a single extraction against a [`GenerativeModel`]. No retries.
pub struct Extractor<M> {
    model: M,
}

impl<M: GenerativeModel> Extractor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn extract(&self, file: &DocumentFile) -> Result<Extraction, ExtractError> {
        info!(
            file = %file.file_name,
            mime_type = %file.mime_type,
            bytes = file.bytes.len(),
            "extracting document"
        );

        let request = GenerateContentRequest::for_document(&file.mime_type, &file.bytes);
        let response = self.model.generate(&request).await?;
        let text = response.first_text().ok_or(ExtractError::EmptyResponse)?;

        let extraction = Extraction::from_model_text(text);
        info!(
            file = %file.file_name,
            fields = extraction.document.populated().count(),
            parsed = extraction.is_parsed(),
            "extraction complete"
        );
        Ok(extraction)
    }
}
