//! Vertical card display for extracted documents.
//!
//! Renders an [`Extraction`] as a grouped, human-readable card. Empty sections
//! are skipped; multi-line values (addresses, mostly) are indented under
//! their label.

use std::io::{self, Write};

use idlens_ai::Extraction;
use idlens_core::CanonicalDocument;

// ── Field groupings ──

const DOCUMENT: &[&str] = &[
    "document_type",
    "document_number",
    "issuing_authority",
    "issue_date",
    "place_of_issue",
];

const HOLDER: &[&str] = &["name", "date_of_birth", "nationality"];

const CONTACT: &[&str] = &["phone_number", "address"];

// ── Public API ──

/// Print an extraction as a vertical card on stdout.
pub fn print_card(extraction: &Extraction, file_name: &str) -> io::Result<()> {
    let stdout = io::stdout();
    write_card(&mut stdout.lock(), extraction, file_name)
}

pub fn write_card<W: Write>(out: &mut W, extraction: &Extraction, file_name: &str) -> io::Result<()> {
    let doc = &extraction.document;
    let heading = doc.document_type().unwrap_or("Document");
    writeln!(out, "=== {heading} ===")?;
    writeln!(out, "{file_name}")?;
    writeln!(out)?;

    if let Some(unparsed) = &extraction.unparsed {
        writeln!(out, "{}", unparsed.parsing_error)?;
        writeln!(out)?;
        writeln!(out, "Model response")?;
        for line in unparsed.raw_text.lines() {
            writeln!(out, "  {line}")?;
        }
        writeln!(out)?;
        return Ok(());
    }

    if doc.is_empty() {
        writeln!(out, "No fields could be extracted.")?;
        writeln!(out)?;
        return Ok(());
    }

    write_section(out, doc, "Document", DOCUMENT)?;
    write_section(out, doc, "Holder", HOLDER)?;
    write_section(out, doc, "Contact", CONTACT)?;
    Ok(())
}

// ── Section rendering ──

fn write_section<W: Write>(
    out: &mut W,
    doc: &CanonicalDocument,
    header: &str,
    fields: &[&str],
) -> io::Result<()> {
    if !fields.iter().any(|f| doc.get(f).is_some()) {
        return Ok(());
    }

    writeln!(out, "{header}")?;
    for &field in fields {
        let Some(value) = doc.get(field) else {
            continue;
        };
        let mut lines = value.lines();
        writeln!(out, "  {:<26} {}", label(field), lines.next().unwrap_or_default())?;
        for rest in lines {
            writeln!(out, "  {:<26} {}", "", rest.trim())?;
        }
    }
    writeln!(out)
}

/// `date_of_birth` → `Date of birth`.
fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
