//! Protected-data classification vocabulary.
//!
//! These enums classify fields for downstream data-protection policy
//! generation. They are the only attributes an override document may change.

use serde::Deserialize;

/// Sensitivity level of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiLevel {
    None,
    /// Quasi-identifiers with low re-identification risk.
    Low,
    /// Quasi-identifiers with moderate risk.
    Medium,
    /// Direct identifiers that need masking.
    High,
    /// Highly sensitive (SSN, MRN, etc.).
    Critical,
}

impl PiiLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Kind of identifying information a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    None,
    /// Names, SSN, MRN.
    DirectIdentifier,
    /// Age, ZIP, dates.
    QuasiIdentifier,
    /// Health conditions and similar.
    SensitiveData,
}

impl PiiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DirectIdentifier => "direct_identifier",
            Self::QuasiIdentifier => "quasi_identifier",
            Self::SensitiveData => "sensitive_data",
        }
    }
}

/// The eighteen HIPAA Safe Harbor identifier classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HipaaIdentifier {
    Names,
    /// Geographic subdivisions smaller than a state.
    Geographic,
    /// Dates directly related to an individual, except year.
    Dates,
    PhoneNumbers,
    FaxNumbers,
    EmailAddresses,
    Ssn,
    Mrn,
    HealthPlanId,
    AccountNumbers,
    LicenseNumbers,
    VehicleIdentifiers,
    DeviceIdentifiers,
    WebUrls,
    IpAddresses,
    Biometric,
    /// Full-face photographs.
    Photos,
    OtherUnique,
}

impl HipaaIdentifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Geographic => "geographic",
            Self::Dates => "dates",
            Self::PhoneNumbers => "phone_numbers",
            Self::FaxNumbers => "fax_numbers",
            Self::EmailAddresses => "email_addresses",
            Self::Ssn => "ssn",
            Self::Mrn => "mrn",
            Self::HealthPlanId => "health_plan_id",
            Self::AccountNumbers => "account_numbers",
            Self::LicenseNumbers => "license_numbers",
            Self::VehicleIdentifiers => "vehicle_identifiers",
            Self::DeviceIdentifiers => "device_identifiers",
            Self::WebUrls => "web_urls",
            Self::IpAddresses => "ip_addresses",
            Self::Biometric => "biometric",
            Self::Photos => "photos",
            Self::OtherUnique => "other_unique",
        }
    }
}

/// How a protected field is masked in generated data-access layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskingStrategy {
    None,
    /// Replace with NULL or a fixed value.
    Redact,
    /// Replace with a reversible token.
    Tokenize,
    /// One-way hash.
    Hash,
    /// Reduce precision.
    Generalize,
    /// Remove entirely.
    Suppress,
    /// Show a partial value (e.g., last 4 of SSN).
    Partial,
}

impl MaskingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Redact => "redact",
            Self::Tokenize => "tokenize",
            Self::Hash => "hash",
            Self::Generalize => "generalize",
            Self::Suppress => "suppress",
            Self::Partial => "partial",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pii_level_from_yaml() {
        let level: PiiLevel = serde_yaml::from_str("critical").unwrap();
        assert_eq!(level, PiiLevel::Critical);
        assert_eq!(level.as_str(), "critical");
    }

    #[test]
    fn test_hipaa_identifier_from_yaml() {
        let id: HipaaIdentifier = serde_yaml::from_str("phone_numbers").unwrap();
        assert_eq!(id, HipaaIdentifier::PhoneNumbers);
        assert_eq!(id.as_str(), "phone_numbers");
    }

    #[test]
    fn test_masking_strategy_rejects_unknown() {
        assert!(serde_yaml::from_str::<MaskingStrategy>("scramble").is_err());
    }
}
