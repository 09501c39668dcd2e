use indexmap::IndexMap;
use serde::Deserialize;

use crate::pii::{HipaaIdentifier, MaskingStrategy, PiiCategory, PiiLevel};

/// A named schema member, either a leaf or a composite with nested children.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    /// Identifier in source casing (FHIR camelCase).
    pub name: String,
    /// Abstract type token, possibly `[]`-prefixed for collections. Ignored
    /// by generators when `children` is non-empty.
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pii_level: Option<PiiLevel>,
    #[serde(default)]
    pub pii_category: Option<PiiCategory>,
    #[serde(default)]
    pub hipaa_identifier: Option<HipaaIdentifier>,
    #[serde(default)]
    pub masking_strategy: Option<MaskingStrategy>,
    #[serde(default)]
    pub masking_params: IndexMap<String, serde_yaml::Value>,
    /// Nested fields; non-empty marks a composite type.
    #[serde(default)]
    pub children: Vec<Field>,
}

impl Field {
    /// Whether this field is a composite (structural) type.
    pub fn is_composite(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_field() {
        let field: Field = serde_yaml::from_str("name: birthDate\ntype: date").unwrap();
        assert_eq!(field.name, "birthDate");
        assert_eq!(field.ty, "date");
        assert!(!field.required);
        assert!(!field.is_composite());
        assert!(field.pii_level.is_none());
    }

    #[test]
    fn test_composite_field() {
        let field: Field = serde_yaml::from_str(
            r#"
name: address
children:
  - name: city
    type: string
  - name: postalCode
    type: string
"#,
        )
        .unwrap();
        assert!(field.is_composite());
        assert_eq!(field.children.len(), 2);
        assert_eq!(field.children[1].name, "postalCode");
    }

    #[test]
    fn test_field_with_protection_metadata() {
        let field: Field = serde_yaml::from_str(
            r#"
name: ssn
type: string
required: true
pii_level: critical
pii_category: direct_identifier
hipaa_identifier: ssn
masking_strategy: partial
masking_params:
  show_last: 4
"#,
        )
        .unwrap();
        assert_eq!(field.pii_level, Some(crate::PiiLevel::Critical));
        assert_eq!(field.hipaa_identifier, Some(crate::HipaaIdentifier::Ssn));
        assert_eq!(field.masking_params["show_last"], serde_yaml::Value::from(4));
    }
}
