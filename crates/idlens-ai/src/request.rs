//! Gemini `generateContent` wire types and the extraction prompt.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

// ── Prompt template ──

pub const EXTRACTION_PROMPT: &str = "\
Extract the key identity information from this identification document.

Return ONLY a JSON object with the following fields, including a field only if it is \
present on the document:
- document_type: type of ID (Aadhaar, PAN, Passport, Driver's License, Voter ID, ...)
- name: full name as printed on the document
- date_of_birth: date of birth in DD-MM-YYYY format
- document_number: the unique identifier (Aadhaar number, PAN, passport number, ...)
- nationality: the holder's nationality
- issuing_authority: the authority that issued the document
- phone_number: phone number, if printed
- address: the complete address on a single line
- issue_date: date of issue in DD-MM-YYYY format
- place_of_issue: where the document was issued

Do not include disclaimers, instructions printed on the card, or any other text. \
Return only the JSON object.";

/// Sampling parameters sent with every extraction request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

/// Binary payload embedded in a request part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Standard base64, no `data:` prefix.
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single-turn request: the extraction prompt followed by the document.
    pub fn for_document(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part {
                        text: Some(EXTRACTION_PROMPT.to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: encode_payload(bytes),
                        }),
                    },
                ],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

/// Transport-safe encoding of the document bytes.
pub fn encode_payload(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

// ── Response envelope ──

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }

    /// Envelope carrying a single text answer.
    #[cfg(test)]
    pub(crate) fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".into()),
                    parts: vec![Part {
                        text: Some(text.into()),
                        inline_data: None,
                    }],
                }),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_lists_every_canonical_field() {
        for field in idlens_core::FIELD_NAMES {
            assert!(
                EXTRACTION_PROMPT.contains(&format!("- {field}:")),
                "prompt missing {field}"
            );
        }
    }

    #[test]
    fn request_wire_shape() {
        let req = GenerateContentRequest::for_document("image/png", b"\x89PNG");
        let v = serde_json::to_value(&req).unwrap();

        let parts = &v["contents"][0]["parts"];
        assert_eq!(parts.as_array().unwrap().len(), 2);
        assert_eq!(parts[0]["text"], EXTRACTION_PROMPT);
        assert!(parts[0].get("inlineData").is_none());
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "iVBORw==");
        assert!(v["contents"][0].get("role").is_none());

        let cfg = &v["generationConfig"];
        assert_eq!(cfg["topK"], 32);
        assert_eq!(cfg["maxOutputTokens"], 2048);
        assert_eq!(cfg["topP"], 1.0);
    }

    #[test]
    fn payload_has_no_data_url_prefix() {
        assert_eq!(encode_payload(b"hello"), "aGVsbG8=");
        assert_eq!(encode_payload(b""), "");
    }

    #[test]
    fn first_text_of_full_envelope() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"name\": \"A\"}"}, {"text": "ignored"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10}
        });
        let resp: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.first_text(), Some("{\"name\": \"A\"}"));
    }

    #[test]
    fn first_text_missing_pieces() {
        let cases = [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "x", "data": ""}}]}}]}),
        ];
        for body in cases {
            let resp: GenerateContentResponse = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(resp.first_text(), None, "{body}");
        }
    }

    #[test]
    fn from_text_round_trips_through_first_text() {
        let resp = GenerateContentResponse::from_text("hello");
        assert_eq!(resp.first_text(), Some("hello"));
    }
}
