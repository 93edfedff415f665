use std::fmt;

use crate::error::ExtractError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Settings for the external model call.
#[derive(Clone)]
pub struct ExtractorConfig {
    api_key: Option<String>,
    pub model: String,
    /// API root without trailing slash, e.g. `https://host/v1beta`.
    pub base_url: String,
}

impl ExtractorConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The credential, or [`ExtractError::Configuration`] when unset or blank.
    pub fn api_key(&self) -> Result<&str, ExtractError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ExtractError::Configuration)
    }
}

impl fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_configuration_error() {
        let cfg = ExtractorConfig::new(None);
        assert!(matches!(cfg.api_key(), Err(ExtractError::Configuration)));
    }

    #[test]
    fn blank_key_is_configuration_error() {
        let cfg = ExtractorConfig::new(Some("   ".into()));
        assert!(matches!(cfg.api_key(), Err(ExtractError::Configuration)));
    }

    #[test]
    fn key_is_trimmed() {
        let cfg = ExtractorConfig::new(Some(" abc123\n".into()));
        assert_eq!(cfg.api_key().unwrap(), "abc123");
    }

    #[test]
    fn defaults() {
        let cfg = ExtractorConfig::new(None);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let cfg = ExtractorConfig::new(None).with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(cfg.base_url, "http://localhost:8080/v1beta");
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = ExtractorConfig::new(Some("secret-key".into())).with_model("gemini-test");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("secret-key"));
        assert!(dbg.contains("<redacted>"));
        assert!(dbg.contains("gemini-test"));
    }
}
