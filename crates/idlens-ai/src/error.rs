use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("API key is missing. Please check your environment variables.")]
    Configuration,

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimit { message: Option<String> },

    #[error("API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("model response contained no text candidate")]
    EmptyResponse,

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "http")]
    /// Built with the URL stripped: the API key travels in the query string.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),
}

impl ExtractError {
    #[cfg(feature = "http")]
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    /// Worth retrying later by the user. Nothing is retried automatically.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }
}

/// Error body returned by Google APIs on non-2xx responses.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// "rate" or "rates" as a whole word, or joined to "limit". Keeps "generate"
// and "accurate" out.
static RATE_FLAVOURED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brate(?:s?\b|[\s_-]?limit)").expect("static regex"));

/// Classify a non-2xx upstream response.
///
/// HTTP 429, or an upstream message that talks about rates, is a
/// [`ExtractError::RateLimit`]. Anything else is [`ExtractError::Upstream`]
/// carrying the upstream `error.message`, falling back to the HTTP reason
/// phrase.
pub fn classify_failure(status: u16, reason: Option<&str>, body: &str) -> ExtractError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error)
        .and_then(|err| err.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let rate_flavoured = message
        .as_deref()
        .is_some_and(|m| RATE_FLAVOURED.is_match(m));

    if status == 429 || rate_flavoured {
        return ExtractError::RateLimit { message };
    }

    let message = message
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));
    ExtractError::Upstream { status, message }
}
