//! Uploaded document payloads.

use std::path::Path;

use crate::error::ExtractError;

/// Declared MIME type for a file name, by extension.
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "json" => "application/json",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    };
    Some(mime)
}

/// Only images and PDFs can be sent for extraction.
pub fn is_accepted_type(mime_type: &str) -> bool {
    mime_type.contains("image") || mime_type.contains("pdf")
}

/// A single document ready to be sent to the model.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, declaring its MIME type from the extension.
    ///
    /// Files with an unknown extension get `application/octet-stream`.
    pub async fn read(path: &Path) -> Result<Self, ExtractError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_type_for(path).unwrap_or("application/octet-stream");
        Ok(Self::new(file_name, mime_type, bytes))
    }
}
