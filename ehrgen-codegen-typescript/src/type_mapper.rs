//! TypeScript type mapper implementation.

use ehrgen_codegen::TypeMapper;
use ehrgen_core::ScalarType;

/// TypeScript type mapper implementation.
///
/// Temporal and binary scalars map to `string` (ISO 8601 and base64), the
/// usual JSON wire representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String
            | ScalarType::Code
            | ScalarType::Id
            | ScalarType::Uri
            | ScalarType::Url
            | ScalarType::Date
            | ScalarType::DateTime
            | ScalarType::Instant
            | ScalarType::Base64Binary => "string",
            ScalarType::Integer
            | ScalarType::PositiveInt
            | ScalarType::UnsignedInt
            | ScalarType::Decimal => "number",
            ScalarType::Boolean => "boolean",
        }
    }

    fn list_of(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }

    fn unknown_type(&self) -> &'static str {
        "unknown"
    }
}
