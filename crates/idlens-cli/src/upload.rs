use std::path::Path;

use idlens_ai::file::{is_accepted_type, mime_type_for};
use idlens_ai::{DocumentFile, ExtractError, ExtractorConfig};
use tracing::debug;

/// Load a file offered for extraction.
///
/// Anything that is not an image or PDF yields `Ok(None)` and is never read.
/// The credential is checked before the file is touched.
pub async fn accept(
    path: &Path,
    config: &ExtractorConfig,
) -> Result<Option<DocumentFile>, ExtractError> {
    let Some(mime_type) = mime_type_for(path).filter(|m| is_accepted_type(m)) else {
        debug!(path = %path.display(), "skipping file that is neither an image nor a PDF");
        return Ok(None);
    };

    config.api_key()?;

    let file = DocumentFile::read(path).await?;
    debug!(file = %file.file_name, mime_type, bytes = file.bytes.len(), "accepted upload");
    Ok(Some(file))
}
