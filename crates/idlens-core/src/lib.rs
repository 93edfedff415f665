//! Core types and normalisation rules for identity-document extraction.

pub mod date;
pub mod doc_type;
pub mod document;
pub mod normalize;
pub mod raw;

pub use date::normalize_date;
pub use doc_type::{DocumentType, classify};
pub use document::{CanonicalDocument, FIELD_NAMES};
pub use normalize::normalize;
pub use raw::RawExtractionResult;
