//! Response normalisation: raw model JSON → [`CanonicalDocument`].
//!
//! Evidence is applied in three passes over an immutable input tree:
//!
//! 1. Top-level keys, each canonical field trying its own key and then its
//!    aliases in order.
//! 2. The optional `sections` array, scanned in order by section-name and
//!    nested field-name keywords.
//! 3. Inference of issuer and nationality for Indian national IDs.
//!
//! Every write goes through [`fill`], which never overwrites a populated
//! field, so earlier evidence always wins.

use serde_json::Value;
use tracing::debug;

use crate::date::normalize_date;
use crate::doc_type::{DocumentType, classify};
use crate::document::{CanonicalDocument, Field};
use crate::raw::{array_field, first_text_field, lowercase_field, scalar_text};

/// Issuer recorded for Aadhaar cards when the model reports none.
pub const AADHAAR_ISSUER: &str = "Govt of India";

/// Nationality recorded for Aadhaar and PAN cards when the model reports none.
pub const INDIAN_NATIONALITY: &str = "Indian";

/// Post-processing applied to a value before it is stored.
#[derive(Debug, Clone, Copy)]
enum Transform {
    Trimmed,
    DocumentType,
    Date,
}

impl Transform {
    fn apply(self, value: String) -> Option<String> {
        let out = match self {
            Self::Trimmed => value,
            Self::DocumentType => classify(&value),
            Self::Date => normalize_date(&value),
        };
        let out = out.trim();
        (!out.is_empty()).then(|| out.to_string())
    }
}

/// A canonical field and the keys that may carry it, in precedence order.
struct KeyRule {
    field: Field,
    keys: &'static [&'static str],
    transform: Transform,
}

// ── Top-level key table ──

const TOP_LEVEL_RULES: &[KeyRule] = &[
    KeyRule {
        field: Field::DocumentType,
        keys: &["document_type"],
        transform: Transform::DocumentType,
    },
    KeyRule {
        field: Field::Name,
        keys: &["name"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::DocumentNumber,
        keys: &[
            "document_number",
            "aadhaar_number",
            "pan_number",
            "passport_number",
        ],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::Nationality,
        keys: &["nationality"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::IssuingAuthority,
        keys: &["issuing_authority"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::PhoneNumber,
        keys: &["phone_number"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::Address,
        keys: &["address"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::PlaceOfIssue,
        keys: &["place_of_issue"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::DateOfBirth,
        keys: &["date_of_birth", "D_O_B", "D.O.B", "dob"],
        transform: Transform::Date,
    },
    KeyRule {
        field: Field::IssueDate,
        keys: &["issue_date"],
        transform: Transform::Date,
    },
];

// ── Section tables ──

const PERSONAL_SECTION: &[KeyRule] = &[
    KeyRule {
        field: Field::Name,
        keys: &["name"],
        transform: Transform::Trimmed,
    },
    KeyRule {
        field: Field::DateOfBirth,
        keys: &["date_of_birth"],
        transform: Transform::Date,
    },
];

const AADHAAR_SECTION: &[KeyRule] = &[KeyRule {
    field: Field::DocumentNumber,
    keys: &["aadhaar_number"],
    transform: Transform::Trimmed,
}];

const DATE_SECTION: &[KeyRule] = &[
    KeyRule {
        field: Field::IssueDate,
        keys: &["issue_date"],
        transform: Transform::Date,
    },
    KeyRule {
        field: Field::DateOfBirth,
        keys: &["date_of_birth"],
        transform: Transform::Date,
    },
];

/// Rule for one `information: [{field, value}]` item, keyed on the
/// lower-cased `field` label.
struct LabelRule {
    matches: fn(&str) -> bool,
    field: Field,
    transform: Transform,
}

fn is_address(label: &str) -> bool {
    label.contains("address")
}

fn is_phone(label: &str) -> bool {
    label.contains("phone")
}

// "Place of Birth" is a place, not a date.
fn is_birth_date(label: &str) -> bool {
    label.contains("dob") || (label.contains("birth") && !label.contains("place"))
}

fn is_place(label: &str) -> bool {
    label.contains("place")
}

fn is_issue(label: &str) -> bool {
    label.contains("issue")
}

fn is_authority(label: &str) -> bool {
    label.contains("authority")
}

fn is_nationality(label: &str) -> bool {
    label.contains("nationality")
}

/// Checked in order; the first matching rule claims the item.
const INFORMATION_RULES: &[LabelRule] = &[
    LabelRule {
        matches: is_address,
        field: Field::Address,
        transform: Transform::Trimmed,
    },
    LabelRule {
        matches: is_phone,
        field: Field::PhoneNumber,
        transform: Transform::Trimmed,
    },
    LabelRule {
        matches: is_birth_date,
        field: Field::DateOfBirth,
        transform: Transform::Date,
    },
    LabelRule {
        matches: is_place,
        field: Field::PlaceOfIssue,
        transform: Transform::Trimmed,
    },
    LabelRule {
        matches: is_issue,
        field: Field::IssueDate,
        transform: Transform::Date,
    },
    LabelRule {
        matches: is_authority,
        field: Field::IssuingAuthority,
        transform: Transform::Trimmed,
    },
    LabelRule {
        matches: is_nationality,
        field: Field::Nationality,
        transform: Transform::Trimmed,
    },
];

// ── Public API ──

/// Normalise a raw model response into a [`CanonicalDocument`].
///
/// Never fails: absent or non-object input yields an empty record.
pub fn normalize(raw: Option<&Value>) -> CanonicalDocument {
    let mut doc = CanonicalDocument::default();
    let Some(raw) = raw.filter(|v| v.is_object()) else {
        return doc;
    };

    for rule in TOP_LEVEL_RULES {
        if let Some(value) = first_text_field(raw, rule.keys) {
            fill(&mut doc, rule.field, value, rule.transform);
        }
    }

    for section in array_field(raw, "sections") {
        if section.is_object() {
            apply_section(&mut doc, section);
        }
    }

    infer_defaults(&mut doc);
    doc
}

/// Store `value` in `field` unless the field is already populated.
///
/// Returns whether the value was written.
fn fill(doc: &mut CanonicalDocument, field: Field, value: String, transform: Transform) -> bool {
    let slot = doc.slot_mut(field);
    if slot.is_some() {
        return false;
    }
    match transform.apply(value) {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}

/// Scan one section object. Order within a section: personal details,
/// Aadhaar details, `information` items, then dates.
fn apply_section(doc: &mut CanonicalDocument, section: &Value) {
    let section_name = lowercase_field(section, "section_name").unwrap_or_default();

    if section_name.contains("personal") {
        apply_key_rules(doc, section, &section_name, PERSONAL_SECTION);
    }

    if section_name.contains("aadhaar") {
        apply_key_rules(doc, section, &section_name, AADHAAR_SECTION);
        // An Aadhaar section identifies the document even without a type key.
        fill(
            doc,
            Field::DocumentType,
            DocumentType::Aadhaar.as_str().to_string(),
            Transform::Trimmed,
        );
    }

    for item in array_field(section, "information") {
        apply_information_item(doc, item);
    }

    if section_name.contains("date") {
        apply_key_rules(doc, section, &section_name, DATE_SECTION);
    }
}

fn apply_key_rules(
    doc: &mut CanonicalDocument,
    section: &Value,
    section_name: &str,
    rules: &[KeyRule],
) {
    for rule in rules {
        if let Some(value) = first_text_field(section, rule.keys)
            && fill(doc, rule.field, value, rule.transform)
        {
            debug!(section = %section_name, field = ?rule.field, "filled from section");
        }
    }
}

fn apply_information_item(doc: &mut CanonicalDocument, item: &Value) {
    let Some(label) = lowercase_field(item, "field") else {
        return;
    };
    let Some(value) = item.get("value").and_then(scalar_text) else {
        return;
    };
    if let Some(rule) = INFORMATION_RULES.iter().find(|rule| (rule.matches)(&label))
        && fill(doc, rule.field, value, rule.transform)
    {
        debug!(label = %label, field = ?rule.field, "filled from section information");
    }
}

fn infer_defaults(doc: &mut CanonicalDocument) {
    let Some(kind) = doc.document_type().and_then(DocumentType::from_label) else {
        return;
    };

    if kind == DocumentType::Aadhaar {
        fill(
            doc,
            Field::IssuingAuthority,
            AADHAAR_ISSUER.to_string(),
            Transform::Trimmed,
        );
    }
    if kind.is_indian_national_id() {
        fill(
            doc,
            Field::Nationality,
            INDIAN_NATIONALITY.to_string(),
            Transform::Trimmed,
        );
    }
}
