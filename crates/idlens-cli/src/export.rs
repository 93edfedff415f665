//! JSON export of an extraction: pretty text for stdout and
//! `<stem>-extracted.json` files on disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use idlens_ai::Extraction;
use tracing::info;

const FALLBACK_STEM: &str = "document";

/// `passport.scan.pdf` → `passport.scan-extracted.json`.
pub fn export_file_name(source_name: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .filter(|s| !s.trim().is_empty());
    match stem {
        Some(stem) => format!("{stem}-extracted.json"),
        None => format!("{FALLBACK_STEM}-extracted.json"),
    }
}

/// Two-space indented JSON; only populated fields appear.
pub fn to_pretty_json(extraction: &Extraction) -> serde_json::Result<String> {
    serde_json::to_string_pretty(extraction)
}

/// Write the extraction into `out_dir`, returning the path written.
pub fn write_export(extraction: &Extraction, source_name: &str, out_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let path = out_dir.join(export_file_name(source_name));
    let mut json = to_pretty_json(extraction).context("serialising extraction")?;
    json.push('\n');
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), "exported extraction");
    Ok(path)
}
