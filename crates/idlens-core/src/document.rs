//! The canonical identity-document record.

use serde::Serialize;

/// Field names of [`CanonicalDocument`], in display and serialisation order.
pub const FIELD_NAMES: [&str; 10] = [
    "document_type",
    "name",
    "date_of_birth",
    "document_number",
    "nationality",
    "issuing_authority",
    "phone_number",
    "address",
    "issue_date",
    "place_of_issue",
];

/// Fixed-schema record produced from one model response.
///
/// Built once by [`crate::normalize`] and read-only afterwards. Every populated
/// field is non-empty after trimming; unset fields are omitted when serialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    /// `DD-MM-YYYY` when the source date could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) issuing_authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) place_of_issue: Option<String>,
}

impl CanonicalDocument {
    pub fn document_type(&self) -> Option<&str> {
        self.document_type.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }

    pub fn document_number(&self) -> Option<&str> {
        self.document_number.as_deref()
    }

    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    pub fn issuing_authority(&self) -> Option<&str> {
        self.issuing_authority.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn issue_date(&self) -> Option<&str> {
        self.issue_date.as_deref()
    }

    pub fn place_of_issue(&self) -> Option<&str> {
        self.place_of_issue.as_deref()
    }

    /// Look up a field by its serialised name.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "document_type" => self.document_type(),
            "name" => self.name(),
            "date_of_birth" => self.date_of_birth(),
            "document_number" => self.document_number(),
            "nationality" => self.nationality(),
            "issuing_authority" => self.issuing_authority(),
            "phone_number" => self.phone_number(),
            "address" => self.address(),
            "issue_date" => self.issue_date(),
            "place_of_issue" => self.place_of_issue(),
            _ => None,
        }
    }

    /// Populated fields as `(name, value)` pairs, in [`FIELD_NAMES`] order.
    pub fn populated(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_NAMES
            .iter()
            .filter_map(|&field| self.get(field).map(|value| (field, value)))
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.populated().next().is_none()
    }

    /// Mutable slot for a field name. Crate-internal: the normaliser is the
    /// only writer.
    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::DocumentType => &mut self.document_type,
            Field::Name => &mut self.name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::DocumentNumber => &mut self.document_number,
            Field::Nationality => &mut self.nationality,
            Field::IssuingAuthority => &mut self.issuing_authority,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Address => &mut self.address,
            Field::IssueDate => &mut self.issue_date,
            Field::PlaceOfIssue => &mut self.place_of_issue,
        }
    }
}

/// Canonical field identifiers used by the normalisation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    DocumentType,
    Name,
    DateOfBirth,
    DocumentNumber,
    Nationality,
    IssuingAuthority,
    PhoneNumber,
    Address,
    IssueDate,
    PlaceOfIssue,
}
