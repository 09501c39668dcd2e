//! Rust type mapper implementation.

use ehrgen_codegen::TypeMapper;
use ehrgen_core::ScalarType;

/// Rust type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String
            | ScalarType::Code
            | ScalarType::Id
            | ScalarType::Uri
            | ScalarType::Url => "String",
            ScalarType::Integer => "i64",
            ScalarType::PositiveInt | ScalarType::UnsignedInt => "u32",
            ScalarType::Decimal => "f64",
            ScalarType::Boolean => "bool",
            ScalarType::Date => "chrono::NaiveDate",
            ScalarType::DateTime | ScalarType::Instant => "chrono::DateTime<chrono::Utc>",
            ScalarType::Base64Binary => "Vec<u8>",
        }
    }

    fn list_of(&self, inner: &str) -> String {
        format!("Vec<{}>", inner)
    }

    fn unknown_type(&self) -> &'static str {
        "serde_json::Value"
    }
}
