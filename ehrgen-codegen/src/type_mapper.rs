//! Type mapping between the abstract schema vocabulary and target languages.

use ehrgen_core::{FieldType, ScalarType};

/// Trait for mapping abstract field types to language-specific type syntax.
///
/// The mapping is total by construction: unrecognized tokens fall back to the
/// language's untyped representation and collections recurse through
/// [`map_field_type`](Self::map_field_type), so arbitrarily nested
/// collections come for free.
///
/// Optionality is not a type-level concern here; each generator renders
/// optional fields in its language's idiom from `Field::required`.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar token to a language-specific type string
    fn map_scalar(&self, scalar: ScalarType) -> &'static str;

    /// Collection syntax wrapping an already-mapped inner type
    /// (e.g. `Vec<T>` in Rust, `list[T]` in Python)
    fn list_of(&self, inner: &str) -> String;

    /// Fallback representation for tokens outside the vocabulary
    fn unknown_type(&self) -> &'static str;

    /// Map a raw type token as written in a schema file
    fn map_token(&self, token: &str) -> String {
        self.map_field_type(&FieldType::parse(token))
    }

    /// Map a parsed abstract type, recursing through collections
    fn map_field_type(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Scalar(scalar) => self.map_scalar(*scalar).to_string(),
            FieldType::List(inner) => self.list_of(&self.map_field_type(inner)),
            FieldType::Unknown(_) => self.unknown_type().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubMapper;

    impl TypeMapper for StubMapper {
        fn language(&self) -> &'static str {
            "stub"
        }

        fn map_scalar(&self, scalar: ScalarType) -> &'static str {
            match scalar {
                ScalarType::Boolean => "Flag",
                _ => "Text",
            }
        }

        fn list_of(&self, inner: &str) -> String {
            format!("Seq<{}>", inner)
        }

        fn unknown_type(&self) -> &'static str {
            "Whatever"
        }
    }

    #[test]
    fn test_scalar_mapping() {
        assert_eq!(StubMapper.map_token("boolean"), "Flag");
        assert_eq!(StubMapper.map_token("string"), "Text");
    }

    #[test]
    fn test_collection_recursion_preserves_depth() {
        assert_eq!(StubMapper.map_token("[]string"), "Seq<Text>");
        assert_eq!(StubMapper.map_token("[][]string"), "Seq<Seq<Text>>");
        assert_eq!(StubMapper.map_token("[][][]boolean"), "Seq<Seq<Seq<Flag>>>");
    }

    #[test]
    fn test_totality_on_unknown_tokens() {
        assert_eq!(StubMapper.map_token("CodeableConcept"), "Whatever");
        assert_eq!(StubMapper.map_token(""), "Whatever");
        assert_eq!(StubMapper.map_token("[]Reference"), "Seq<Whatever>");
    }
}
