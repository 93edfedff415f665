//! Keyword classification of free-text document-type labels.
//!
//! Models describe the same card in many ways ("aadhar card", "Permanent
//! Account Number (PAN)", "DL - driver license"). The rules below map those
//! onto a closed set of canonical labels. Rules are checked in a fixed order
//! and the first match wins, so a label containing both "pan" and "passport"
//! resolves to `PAN`.

/// Canonical label for documents that match no rule.
pub const OTHER_LABEL: &str = "Other";

/// Recognised identity-document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Aadhaar,
    Pan,
    Passport,
    DriversLicense,
    VoterId,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar",
            Self::Pan => "PAN",
            Self::Passport => "Passport",
            Self::DriversLicense => "Driver's License",
            Self::VoterId => "Voter ID",
        }
    }

    /// Apply the keyword rules to a raw label. Case-insensitive.
    pub fn detect(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();

        if lower.contains("aadhaar") || lower.contains("aadhar") {
            Some(Self::Aadhaar)
        } else if lower.contains("pan") {
            Some(Self::Pan)
        } else if lower.contains("passport") {
            Some(Self::Passport)
        } else if lower.contains("driver") && lower.contains("license") {
            Some(Self::DriversLicense)
        } else if lower.contains("voter") {
            Some(Self::VoterId)
        } else {
            None
        }
    }

    /// Parse a canonical label exactly as produced by [`DocumentType::as_str`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Aadhaar" => Some(Self::Aadhaar),
            "PAN" => Some(Self::Pan),
            "Passport" => Some(Self::Passport),
            "Driver's License" => Some(Self::DriversLicense),
            "Voter ID" => Some(Self::VoterId),
            _ => None,
        }
    }

    /// Whether the document is issued by the Government of India.
    pub fn is_indian_national_id(&self) -> bool {
        matches!(self, Self::Aadhaar | Self::Pan)
    }
}

/// Map a free-text type label to its canonical label.
///
/// Unrecognised labels are returned verbatim, not folded into [`OTHER_LABEL`].
pub fn classify(raw: &str) -> String {
    match DocumentType::detect(raw) {
        Some(kind) => kind.as_str().to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aadhaar_both_spellings() {
        assert_eq!(classify("aadhaar card"), "Aadhaar");
        assert_eq!(classify("AADHAR"), "Aadhaar");
        assert_eq!(classify("Unique ID (Aadhaar)"), "Aadhaar");
    }

    #[test]
    fn pan_card() {
        assert_eq!(classify("PAN Card"), "PAN");
        assert_eq!(classify("Permanent Account Number (PAN)"), "PAN");
    }

    #[test]
    fn passport() {
        assert_eq!(classify("Indian Passport"), "Passport");
    }

    #[test]
    fn drivers_license_needs_both_words() {
        assert_eq!(classify("Driver License"), "Driver's License");
        assert_eq!(classify("driver's license"), "Driver's License");
        assert_eq!(classify("Driving Licence"), "Driving Licence");
        assert_eq!(classify("Driver card"), "Driver card");
    }

    #[test]
    fn voter_id() {
        assert_eq!(classify("Voter ID Card (EPIC)"), "Voter ID");
    }

    #[test]
    fn unknown_passes_through_verbatim() {
        assert_eq!(classify("xyz-unknown"), "xyz-unknown");
        assert_eq!(classify("Ration Card"), "Ration Card");
    }

    #[test]
    fn pan_rule_precedes_passport_rule() {
        // "pan" is checked before "passport", so a label carrying both wins as PAN.
        assert_eq!(classify("PAN / Passport"), "PAN");
        assert_eq!(classify("passport (with pan)"), "PAN");
    }

    #[test]
    fn substring_matches_inside_words() {
        // "company" contains "pan".
        assert_eq!(classify("Company ID"), "PAN");
    }

    #[test]
    fn canonical_labels_are_fixed_points() {
        for kind in [
            DocumentType::Aadhaar,
            DocumentType::Pan,
            DocumentType::Passport,
            DocumentType::DriversLicense,
            DocumentType::VoterId,
        ] {
            assert_eq!(classify(kind.as_str()), kind.as_str());
            assert_eq!(DocumentType::from_label(kind.as_str()), Some(kind));
        }
        assert_eq!(classify(OTHER_LABEL), OTHER_LABEL);
    }

    #[test]
    fn indian_national_ids() {
        assert!(DocumentType::Aadhaar.is_indian_national_id());
        assert!(DocumentType::Pan.is_indian_national_id());
        assert!(!DocumentType::Passport.is_indian_national_id());
    }
}
