//! Extraction layer: Gemini request/response types, model-answer parsing, and
//! the orchestrator that turns a document file into a canonical record.

mod config;
mod error;
mod extract;
pub mod file;
pub mod parse;
pub mod request;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, ExtractorConfig};
pub use error::{ExtractError, classify_failure};
pub use extract::{Extraction, Extractor, GenerativeModel};
pub use file::DocumentFile;
pub use parse::UnparsedResponse;

#[cfg(feature = "http")]
mod gemini;
#[cfg(feature = "http")]
pub use gemini::{GeminiClient, extract};
